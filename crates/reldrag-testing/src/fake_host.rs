//! In-memory stand-ins for the browser window and a dragged element.

use reldrag_foundation::{
    DragHost, DragSurface, ListenerId, PointerEvent, PointerEventKind, PointerId,
    PointerListener, PointerListenerRegistry,
};
use reldrag_graphics::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// Global pointer target that dispatches synchronously, like `window`.
///
/// Clones share the same listener table.
#[derive(Clone, Default)]
pub struct FakeDragHost {
    registry: Rc<PointerListenerRegistry>,
    added: Rc<Cell<usize>>,
    removed: Rc<Cell<usize>>,
}

impl FakeDragHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to the listeners registered for its kind. Returns the
    /// number of listeners that ran.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        self.registry.dispatch(event)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    pub fn listener_count_for(&self, kind: PointerEventKind) -> usize {
        self.registry.count_for(kind)
    }

    /// Total registrations over the host's lifetime.
    pub fn added_total(&self) -> usize {
        self.added.get()
    }

    /// Total removals of live listeners over the host's lifetime.
    pub fn removed_total(&self) -> usize {
        self.removed.get()
    }
}

impl DragHost for FakeDragHost {
    type Surface = FakeDragSurface;

    fn add_pointer_listener(&self, kind: PointerEventKind, listener: PointerListener) -> ListenerId {
        self.added.set(self.added.get() + 1);
        self.registry.add(kind, listener)
    }

    fn remove_pointer_listener(&self, id: ListenerId) {
        if self.registry.remove(id).is_some() {
            self.removed.set(self.removed.get() + 1);
        }
    }
}

struct SurfaceState {
    bounds: Cell<Rect>,
    captured: Cell<Option<PointerId>>,
    refuse_capture: Cell<bool>,
    refuse_release: Cell<bool>,
    capture_attempts: Cell<usize>,
    release_attempts: Cell<usize>,
}

/// Element with fixed bounds and pointer capture bookkeeping.
#[derive(Clone)]
pub struct FakeDragSurface {
    state: Rc<SurfaceState>,
}

impl FakeDragSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            state: Rc::new(SurfaceState {
                bounds: Cell::new(bounds),
                captured: Cell::new(None),
                refuse_capture: Cell::new(false),
                refuse_release: Cell::new(false),
                capture_attempts: Cell::new(0),
                release_attempts: Cell::new(0),
            }),
        }
    }

    /// Element at the origin with the given size.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// Make capture requests fail, as the DOM does for unknown pointers.
    pub fn refuse_capture(&self, refuse: bool) {
        self.state.refuse_capture.set(refuse);
    }

    /// Make release requests fail, as the DOM does once capture was lost.
    pub fn refuse_release(&self, refuse: bool) {
        self.state.refuse_release.set(refuse);
    }

    pub fn captured_pointer(&self) -> Option<PointerId> {
        self.state.captured.get()
    }

    pub fn capture_attempts(&self) -> usize {
        self.state.capture_attempts.get()
    }

    pub fn release_attempts(&self) -> usize {
        self.state.release_attempts.get()
    }
}

impl DragSurface for FakeDragSurface {
    fn bounds(&self) -> Rect {
        self.state.bounds.get()
    }

    fn try_set_pointer_capture(&self, pointer: PointerId) -> bool {
        self.state
            .capture_attempts
            .set(self.state.capture_attempts.get() + 1);
        if self.state.refuse_capture.get() {
            return false;
        }
        self.state.captured.set(Some(pointer));
        true
    }

    fn try_release_pointer_capture(&self, pointer: PointerId) -> bool {
        self.state
            .release_attempts
            .set(self.state.release_attempts.get() + 1);
        if self.state.refuse_release.get() || self.state.captured.get() != Some(pointer) {
            return false;
        }
        self.state.captured.set(None);
        true
    }
}
