//! Assertion utilities for robot testing
//!
//! Helpers for validating the values and lifecycle a drag reported.

use crate::fake_host::FakeDragHost;
use crate::robot::DragRecorder;

/// Assert the exact sequence of values passed to `on_change`.
pub fn assert_values(recorder: &DragRecorder, expected: &[f64], msg: &str) {
    let actual = recorder.values();
    assert_eq!(actual, expected, "{}: on_change values", msg);
}

/// Assert how many times `on_end` ran.
pub fn assert_end_count(recorder: &DragRecorder, expected: usize, msg: &str) {
    assert_eq!(
        recorder.end_count(),
        expected,
        "{}: expected on_end to run {} time(s)",
        msg,
        expected
    );
}

/// Assert that no global pointer listeners remain registered.
pub fn assert_no_listeners(host: &FakeDragHost, msg: &str) {
    assert_eq!(
        host.listener_count(),
        0,
        "{}: {} listener(s) still registered",
        msg,
        host.listener_count()
    );
}
