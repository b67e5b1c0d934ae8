//! Tunables for relative drag sessions.

use crate::gesture_constants::{MIN_AXIS_EXTENT, RELATIVE_DRAG_VALUE_SPAN};

/// Configuration applied to every session a [`crate::RelativeDrag`] starts.
///
/// The defaults map the full element length to 127 value steps and floor
/// the axis extent at one pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    value_span: f64,
    min_axis_extent: f64,
}

impl DragConfig {
    pub fn new() -> Self {
        Self {
            value_span: RELATIVE_DRAG_VALUE_SPAN,
            min_axis_extent: MIN_AXIS_EXTENT,
        }
    }

    /// Value steps covered by a drag across the full axis extent.
    pub fn with_value_span(mut self, value_span: f64) -> Self {
        self.value_span = value_span;
        self
    }

    /// Floor for the axis extent. Values below [`MIN_AXIS_EXTENT`] or
    /// non-finite values fall back to [`MIN_AXIS_EXTENT`].
    pub fn with_min_axis_extent(mut self, min_axis_extent: f64) -> Self {
        self.min_axis_extent = if min_axis_extent.is_finite() && min_axis_extent >= MIN_AXIS_EXTENT
        {
            min_axis_extent
        } else {
            MIN_AXIS_EXTENT
        };
        self
    }

    pub fn value_span(&self) -> f64 {
        self.value_span
    }

    pub fn min_axis_extent(&self) -> f64 {
        self.min_axis_extent
    }

    /// Extent used for the ratio computation; never below the floor.
    pub fn clamp_extent(&self, extent: f64) -> f64 {
        // f64::max ignores NaN, so a NaN extent resolves to the floor.
        extent.max(self.min_axis_extent)
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_gesture_constants() {
        let config = DragConfig::default();
        assert_eq!(config.value_span(), 127.0);
        assert_eq!(config.min_axis_extent(), 1.0);
    }

    #[test]
    fn extent_is_floored() {
        let config = DragConfig::default();
        assert_eq!(config.clamp_extent(0.0), 1.0);
        assert_eq!(config.clamp_extent(-20.0), 1.0);
        assert_eq!(config.clamp_extent(f64::NAN), 1.0);
        assert_eq!(config.clamp_extent(240.0), 240.0);
    }

    #[test]
    fn invalid_floor_falls_back_to_one_pixel() {
        assert_eq!(DragConfig::new().with_min_axis_extent(0.0).min_axis_extent(), 1.0);
        assert_eq!(
            DragConfig::new().with_min_axis_extent(f64::INFINITY).min_axis_extent(),
            1.0
        );
        assert_eq!(DragConfig::new().with_min_axis_extent(8.0).min_axis_extent(), 8.0);
    }
}
