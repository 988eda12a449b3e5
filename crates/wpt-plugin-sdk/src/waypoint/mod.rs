//! Construction of canonical waypoint records.
//!
//! Every numeric field is rounded to a fixed number of decimal places as the
//! last step before emission. Rounding is presentational only; generators
//! do all geometry at full precision.

use serde_json::Value;

use crate::orientation::{Quaternion, yaw_to_quaternion};
use crate::protocol::{Transform, Waypoint, WaypointOptions};

/// Decimal places kept when a generator does not choose its own precision.
pub const DEFAULT_PRECISION: u32 = 6;

/// Builds a waypoint at `(x, y)` facing `yaw`, rounded to
/// [`DEFAULT_PRECISION`] places.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::make_waypoint;
///
/// let waypoint = make_waypoint(1.0, 2.0, std::f64::consts::FRAC_PI_2, None);
/// assert_eq!(waypoint.transform().rotation().qz, 0.707107);
/// assert!(waypoint.options().is_none());
/// ```
#[must_use]
pub fn make_waypoint(x: f64, y: f64, yaw: f64, options: Option<WaypointOptions>) -> Waypoint {
    let builder = WaypointBuilder::new(x, y, yaw);
    match options {
        Some(metadata) => builder.with_options(metadata).build(),
        None => builder.build(),
    }
}

/// Starts an options map stamped with `generated_by`.
#[must_use]
pub fn provenance(generated_by: &str) -> WaypointOptions {
    let mut options = WaypointOptions::new();
    options.insert(
        String::from("generated_by"),
        Value::String(generated_by.to_owned()),
    );
    options
}

/// Step-by-step waypoint construction with a configurable precision.
///
/// # Example
///
/// ```
/// use wpt_plugin_sdk::{WaypointBuilder, provenance};
///
/// let waypoint = WaypointBuilder::new(1.23456, -0.5, 0.0)
///     .with_options(provenance("Example"))
///     .with_precision(2)
///     .build();
/// assert_eq!(waypoint.x(), 1.23);
/// assert_eq!(waypoint.option("generated_by"), Some(&serde_json::json!("Example")));
/// ```
#[derive(Debug, Clone)]
pub struct WaypointBuilder {
    x: f64,
    y: f64,
    yaw: f64,
    options: Option<WaypointOptions>,
    precision: u32,
}

impl WaypointBuilder {
    /// Starts a waypoint at `(x, y)` facing `yaw`.
    #[must_use]
    pub const fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            yaw,
            options: None,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Attaches metadata.
    #[must_use]
    pub fn with_options(mut self, options: WaypointOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Overrides the number of decimal places kept.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Finishes the waypoint, rounding every numeric field.
    #[must_use]
    pub fn build(self) -> Waypoint {
        let rotation = yaw_to_quaternion(self.yaw);
        let rounded = Quaternion {
            qx: 0.0,
            qy: 0.0,
            qz: round_to(rotation.qz, self.precision),
            qw: round_to(rotation.qw, self.precision),
        };
        let transform = Transform::new(
            round_to(self.x, self.precision),
            round_to(self.y, self.precision),
            rounded,
        );
        Waypoint::new(transform, self.options)
    }
}

/// Rounds half away from zero to `precision` decimal places.
///
/// Values whose scaled form is not finite are returned unchanged.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let Ok(exponent) = i32::try_from(precision) else {
        return value;
    };
    let factor = 10_f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // keep JSON free of "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}
