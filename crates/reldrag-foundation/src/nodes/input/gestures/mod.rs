pub mod drag;
pub mod relative_drag;
pub mod start_value;

pub use drag::{round_half_up, DragAxis, DragSession};
pub use relative_drag::{DragStopHandle, RelativeDrag};
pub use start_value::IntoStartValue;
