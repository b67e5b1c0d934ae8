//! Shared gesture constants for relative drags.
//!
//! These are the defaults behind [`crate::DragConfig`]. Values are in logical
//! pixels unless stated otherwise.

/// Number of value steps covered by dragging across the full extent of the
/// element.
///
/// The span is fixed at the 7-bit MIDI range regardless of the domain of the
/// start value, so a fader and a knob of different sizes both cover 0..=127
/// over their own length.
pub const RELATIVE_DRAG_VALUE_SPAN: f64 = 127.0;

/// Smallest axis extent a session will divide by.
///
/// Elements that report a zero or negative size (collapsed, detached) are
/// treated as this many pixels long.
pub const MIN_AXIS_EXTENT: f64 = 1.0;
