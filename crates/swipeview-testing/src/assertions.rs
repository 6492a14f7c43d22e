//! Assertion helpers for gesture tests.

use swipeview_foundation::SwipeEvent;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the exact notification sequence a listener received.
pub fn assert_events(actual: &[SwipeEvent], expected: &[SwipeEvent], msg: &str) {
    assert_eq!(actual, expected, "{}: unexpected notification sequence", msg);
}
