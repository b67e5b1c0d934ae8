//! Geometric primitives: Point, Size, Rect
//!
//! Coordinates are `f64`: browsers report fractional client coordinates
//! and the drag math rounds at half-step ties, so single precision would
//! shift results by one step.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when the size is strictly taller than it is wide.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Axis-aligned rectangle, as reported by a bounding client rect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_requires_strictly_greater_height() {
        assert!(Size::new(20.0, 100.0).is_portrait());
        assert!(!Size::new(100.0, 20.0).is_portrait());
        assert!(!Size::new(40.0, 40.0).is_portrait());
    }

    #[test]
    fn rect_size_ignores_origin() {
        let rect = Rect::new(5.0, 7.0, 100.0, 20.0);
        assert_eq!(rect.size(), Size::new(100.0, 20.0));
        assert!(!rect.size().is_portrait());
    }
}
