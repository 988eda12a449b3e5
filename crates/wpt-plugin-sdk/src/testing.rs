//! Assertion helpers for generator tests.
//!
//! Compiled for this crate's own tests and, through the `test-support`
//! feature, for downstream generator crates.

use crate::protocol::{Context, Waypoint};

/// Tolerance used by [`assert_close`].
pub const TOLERANCE: f64 = 1e-9;

/// Asserts two floats agree within `tolerance`.
///
/// # Panics
///
/// Panics when the values differ by more than `tolerance`.
#[track_caller]
pub fn assert_close_within(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// Asserts two floats agree within [`TOLERANCE`].
///
/// # Panics
///
/// Panics when the values differ by more than [`TOLERANCE`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert_close_within(actual, expected, TOLERANCE);
}

/// Positions of `waypoints` in emission order.
#[must_use]
pub fn positions(waypoints: &[Waypoint]) -> Vec<(f64, f64)> {
    waypoints
        .iter()
        .map(|waypoint| (waypoint.x(), waypoint.y()))
        .collect()
}

/// Headings of `waypoints` in emission order.
#[must_use]
pub fn headings(waypoints: &[Waypoint]) -> Vec<f64> {
    waypoints.iter().map(Waypoint::yaw).collect()
}

/// Parses a context document.
///
/// # Panics
///
/// Panics when `document` is not a valid context.
#[must_use]
#[track_caller]
pub fn context(document: &str) -> Context {
    serde_json::from_str(document)
        .unwrap_or_else(|error| panic!("invalid test context {document}: {error}"))
}
