use crate::surface::WebDragSurface;
use crate::pointer_event;
use reldrag_foundation::{DragHost, ListenerId, PointerEventKind, PointerListener};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, PointerEvent};

type NativeListener = Closure<dyn FnMut(PointerEvent)>;

struct Registration {
    kind: PointerEventKind,
    closure: NativeListener,
}

/// Global pointer listeners on an event target, normally `window`.
pub struct WebDragHost {
    target: EventTarget,
    registrations: RefCell<HashMap<ListenerId, Registration>>,
    // A listener may remove itself while the browser is still running it;
    // its closure is kept here until a registration happens outside dispatch.
    retired: RefCell<Vec<NativeListener>>,
    dispatch_depth: Rc<Cell<usize>>,
    next_id: Cell<u64>,
}

impl WebDragHost {
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            registrations: RefCell::new(HashMap::new()),
            retired: RefCell::new(Vec::new()),
            dispatch_depth: Rc::new(Cell::new(0)),
            next_id: Cell::new(0),
        }
    }

    pub fn for_window() -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into()))
    }

    pub fn listener_count(&self) -> usize {
        self.registrations.borrow().len()
    }
}

impl DragHost for WebDragHost {
    type Surface = WebDragSurface;

    fn add_pointer_listener(&self, kind: PointerEventKind, listener: PointerListener) -> ListenerId {
        if self.dispatch_depth.get() == 0 {
            self.retired.borrow_mut().clear();
        }

        let id = ListenerId::new(self.next_id.get());
        self.next_id.set(id.as_u64() + 1);

        let depth = Rc::clone(&self.dispatch_depth);
        let closure = Closure::wrap(Box::new(move |native: PointerEvent| {
            let event = pointer_event(kind, &native);
            depth.set(depth.get() + 1);
            listener(&event);
            depth.set(depth.get() - 1);
            if event.is_default_prevented() {
                native.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);

        if let Err(err) = self
            .target
            .add_event_listener_with_callback(kind.event_type(), closure.as_ref().unchecked_ref())
        {
            log::warn!("relative drag: could not listen for {}: {:?}", kind.event_type(), err);
        }
        self.registrations
            .borrow_mut()
            .insert(id, Registration { kind, closure });
        id
    }

    fn remove_pointer_listener(&self, id: ListenerId) {
        let Some(registration) = self.registrations.borrow_mut().remove(&id) else {
            return;
        };
        if let Err(err) = self.target.remove_event_listener_with_callback(
            registration.kind.event_type(),
            registration.closure.as_ref().unchecked_ref(),
        ) {
            log::warn!(
                "relative drag: could not remove {} listener: {:?}",
                registration.kind.event_type(),
                err
            );
        }
        self.retired.borrow_mut().push(registration.closure);
    }
}

impl Drop for WebDragHost {
    fn drop(&mut self) {
        for (_, registration) in self.registrations.get_mut().drain() {
            if let Err(err) = self.target.remove_event_listener_with_callback(
                registration.kind.event_type(),
                registration.closure.as_ref().unchecked_ref(),
            ) {
                log::warn!(
                    "relative drag: could not remove {} listener on drop: {:?}",
                    registration.kind.event_type(),
                    err
                );
            }
        }
    }
}
