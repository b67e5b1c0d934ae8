use crate::host::WebDragHost;
use crate::pointer_event;
use crate::surface::WebDragSurface;
use reldrag_core::State;
use reldrag_foundation::{
    DragConfig, DragStopHandle, IntoStartValue, PointerEventKind, RelativeDrag,
};
use web_sys::Element;

/// Relative drag bound to `window`, fed with native DOM events.
///
/// ```ignore
/// let drag = use_relative_drag().expect("window");
/// let handle = drag.start(Some(&event), level, Some(&fader), move |v| set_level(v), || commit());
/// ```
#[derive(Clone)]
pub struct WebRelativeDrag {
    drag: RelativeDrag<WebDragHost>,
}

impl WebRelativeDrag {
    pub fn new(host: WebDragHost, config: DragConfig) -> Self {
        Self {
            drag: RelativeDrag::with_config(host, config),
        }
    }

    pub fn controller(&self) -> &RelativeDrag<WebDragHost> {
        &self.drag
    }

    pub fn is_dragging(&self) -> State<bool> {
        self.drag.is_dragging()
    }

    /// Start dragging `element` from a native `pointerdown`.
    ///
    /// The native event's default action is suppressed when the drag
    /// starts; with no event or no element nothing happens.
    pub fn start<V, C, E>(
        &self,
        event: Option<&web_sys::PointerEvent>,
        start_value: V,
        element: Option<&Element>,
        on_change: C,
        on_end: E,
    ) -> DragStopHandle
    where
        V: IntoStartValue,
        C: Fn(f64) + 'static,
        E: FnOnce() + 'static,
    {
        let (Some(native), Some(element)) = (event, element) else {
            return DragStopHandle::inert();
        };
        let event = pointer_event(PointerEventKind::Down, native);
        let handle = self.drag.start(
            Some(&event),
            start_value,
            Some(WebDragSurface::new(element.clone())),
            on_change,
            on_end,
        );
        if event.is_default_prevented() {
            native.prevent_default();
        }
        handle
    }

    pub fn stop(&self) -> bool {
        self.drag.stop()
    }
}

/// Relative drag listening on the global `window`; `None` outside a
/// browsing context.
pub fn use_relative_drag() -> Option<WebRelativeDrag> {
    let host = WebDragHost::for_window()?;
    Some(WebRelativeDrag::new(host, DragConfig::default()))
}
