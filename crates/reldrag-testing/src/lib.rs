//! Testing utilities and harness for relative drags
//!
//! [`FakeDragHost`] and [`FakeDragSurface`] stand in for `window` and a DOM
//! element; [`DragRobot`] scripts pointer sequences against them.

pub mod fake_host;
pub mod robot;
pub mod robot_assertions;

pub use fake_host::{FakeDragHost, FakeDragSurface};
pub use robot::{DragRecorder, DragRobot};

pub mod prelude {
    pub use crate::fake_host::{FakeDragHost, FakeDragSurface};
    pub use crate::robot::{DragRecorder, DragRobot};
    pub use crate::robot_assertions;
}
