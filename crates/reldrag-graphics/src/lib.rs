//! Pure geometry for relative drag gestures
//!
//! Points, sizes and rectangles in logical (CSS) pixels, shared by the
//! foundation crate and the platform adapters.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
