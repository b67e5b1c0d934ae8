pub mod dispatcher;
pub mod gestures;
pub mod host;
pub mod types;

pub use dispatcher::PointerListenerRegistry;
pub use host::{DragHost, DragSurface, ListenerId, PointerListener};
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::host::{DragHost, DragSurface, ListenerId, PointerListener};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
