//! Pointer input and the relative drag controller.
//!
//! A relative drag turns pointer travel along one axis of an element into a
//! signed value delta: the full length of the element maps to
//! [`gesture_constants::RELATIVE_DRAG_VALUE_SPAN`] steps. Hosts plug in
//! through [`DragHost`] (global pointer listeners) and [`DragSurface`] (the
//! element being dragged).

pub mod config;
pub mod gesture_constants;
pub mod nodes;

pub use config::DragConfig;
pub use nodes::input::gestures::{
    round_half_up, DragAxis, DragSession, DragStopHandle, IntoStartValue, RelativeDrag,
};
pub use nodes::input::{
    DragHost, DragSurface, ListenerId, PointerEvent, PointerEventKind, PointerId,
    PointerListener, PointerListenerRegistry,
};

pub mod prelude {
    pub use crate::config::DragConfig;
    pub use crate::nodes::input::gestures::{DragAxis, DragStopHandle, RelativeDrag};
    pub use crate::nodes::input::prelude::*;
}
