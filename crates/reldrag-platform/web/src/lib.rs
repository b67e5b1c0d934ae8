//! Web platform adapter for relative drags.
//!
//! [`WebDragHost`] listens on `window`, [`WebDragSurface`] wraps the DOM
//! element being dragged and [`WebRelativeDrag`] accepts native
//! `PointerEvent`s directly.

mod drag;
mod host;
mod surface;

pub use drag::{use_relative_drag, WebRelativeDrag};
pub use host::WebDragHost;
pub use surface::WebDragSurface;

use reldrag_foundation::{PointerEvent, PointerEventKind};
use reldrag_graphics::Point;
use wasm_bindgen::JsValue;

/// Read a coordinate as a double. Pointer events report fractional client
/// coordinates, while the `MouseEvent` bindings truncate to whole pixels.
fn client_coordinate(event: &web_sys::PointerEvent, name: &str, whole: i32) -> f64 {
    js_sys::Reflect::get(event.as_ref(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(whole))
}

/// Convert a DOM pointer event, keeping its `pointerId`.
///
/// Client coordinates are CSS pixels, the same space as
/// `getBoundingClientRect`, so no device pixel scaling applies.
pub fn pointer_event(kind: PointerEventKind, event: &web_sys::PointerEvent) -> PointerEvent {
    let position = Point::new(
        client_coordinate(event, "clientX", event.client_x()),
        client_coordinate(event, "clientY", event.client_y()),
    );
    PointerEvent::new(kind, position).with_id(event.pointer_id())
}

/// Route Rust panics to the browser console.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}
