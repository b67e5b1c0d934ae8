//! Relative drag derivation.
//!
//! [`DragSession`] is the immutable record captured when a drag starts. Every
//! later pointer position is turned into a value by measuring the travel
//! along the session's axis as a fraction of the element's extent and
//! scaling it by the configured value span.

use crate::config::DragConfig;
use crate::nodes::input::types::{PointerEvent, PointerId};
use reldrag_graphics::{Point, Rect};

/// The single axis a session reads pointer travel from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

impl DragAxis {
    /// Vertical when the element is strictly taller than wide.
    pub fn for_bounds(bounds: &Rect) -> Self {
        if bounds.size().is_portrait() {
            DragAxis::Vertical
        } else {
            DragAxis::Horizontal
        }
    }

    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            DragAxis::Horizontal => point.x,
            DragAxis::Vertical => point.y,
        }
    }

    pub fn extent(self, bounds: &Rect) -> f64 {
        match self {
            DragAxis::Horizontal => bounds.width,
            DragAxis::Vertical => bounds.height,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == DragAxis::Vertical
    }
}

/// Rounds half-way cases toward positive infinity, like the DOM `Math.round`.
///
/// `round_half_up(2.5) == 3.0` and `round_half_up(-2.5) == -2.0`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// State captured at the start of a relative drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    start_pointer_coordinate: f64,
    start_value: f64,
    axis_extent: f64,
    axis: DragAxis,
    pointer_id: Option<PointerId>,
    value_span: f64,
}

impl DragSession {
    pub fn begin(event: &PointerEvent, bounds: Rect, start_value: f64, config: &DragConfig) -> Self {
        let axis = DragAxis::for_bounds(&bounds);
        Self {
            start_pointer_coordinate: axis.coordinate(event.position),
            start_value,
            axis_extent: config.clamp_extent(axis.extent(&bounds)),
            axis,
            pointer_id: event.id,
            value_span: config.value_span(),
        }
    }

    pub fn start_pointer_coordinate(&self) -> f64 {
        self.start_pointer_coordinate
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn axis_extent(&self) -> f64 {
        self.axis_extent
    }

    pub fn axis(&self) -> DragAxis {
        self.axis
    }

    pub fn is_vertical(&self) -> bool {
        self.axis.is_vertical()
    }

    pub fn pointer_id(&self) -> Option<PointerId> {
        self.pointer_id
    }

    /// Whether a move event belongs to this session.
    ///
    /// A session started without a pointer id accepts every pointer.
    pub fn accepts(&self, event: &PointerEvent) -> bool {
        match self.pointer_id {
            Some(id) => event.id == Some(id),
            None => true,
        }
    }

    /// Signed number of value steps for a pointer at `position`.
    ///
    /// Upward travel is positive on the vertical axis, matching a physical
    /// fader; rightward travel is positive on the horizontal axis.
    pub fn value_delta(&self, position: Point) -> f64 {
        let delta = self.axis.coordinate(position) - self.start_pointer_coordinate;
        let ratio = match self.axis {
            DragAxis::Vertical => -delta / self.axis_extent,
            DragAxis::Horizontal => delta / self.axis_extent,
        };
        round_half_up(ratio * self.value_span)
    }

    /// Unclamped value for a pointer at `position`.
    pub fn value_for(&self, position: Point) -> f64 {
        self.start_value + self.value_delta(position)
    }
}
