//! Evenly spaced waypoints along a straight line.
//!
//! The line starts at the clicked `start_point` and runs along its heading.
//! Every waypoint keeps that heading.

use serde_json::json;
use tracing::debug;
use wpt_plugin_sdk::{
    Context, GenerateError, InputDef, InputKind, PluginManifest, Point, PropertyDef, PropertyKind,
    Properties, Waypoint, WaypointBuilder, WaypointGenerator, provenance,
};

use crate::count_from;

/// Interaction input holding the first pose.
pub const START_POINT: &str = "start_point";

/// Provenance stamped on every waypoint.
pub const GENERATED_BY: &str = "LineGenerator";

/// Smallest distance between consecutive waypoints.
pub const MIN_SPACING: f64 = 0.01;

const DEFAULT_NUM_POINTS: i64 = 5;
const DEFAULT_SPACING: f64 = 1.0;
const PRECISION: u32 = 6;

/// Parameters read from the context properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    num_points: u32,
    spacing: f64,
}

impl LineParams {
    /// Reads `num_points` and `spacing`, applying their lower bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`wpt_plugin_sdk::ContextError`] wrapped in
    /// [`GenerateError`] when a property cannot be converted.
    pub fn from_properties(properties: &Properties) -> Result<Self, GenerateError> {
        let num_points = properties.i64("num_points", DEFAULT_NUM_POINTS)?.max(1);
        let spacing = properties.f64("spacing", DEFAULT_SPACING)?;
        Ok(Self {
            num_points: count_from(num_points),
            spacing: if spacing <= MIN_SPACING {
                MIN_SPACING
            } else {
                spacing
            },
        })
    }

    /// Number of waypoints to emit, at least one.
    #[must_use]
    pub const fn num_points(&self) -> u32 {
        self.num_points
    }

    /// Distance between consecutive waypoints after clamping.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }
}

/// Places `num_points` waypoints `spacing` apart along the start heading.
#[must_use]
pub fn plan(start: &Point, params: LineParams) -> Vec<Waypoint> {
    let yaw = start.yaw();
    let (sin, cos) = yaw.sin_cos();
    (0..params.num_points)
        .map(|index| {
            let distance = f64::from(index) * params.spacing;
            let mut options = provenance(GENERATED_BY);
            options.insert(String::from("line_index"), json!(index));
            WaypointBuilder::new(start.x + distance * cos, start.y + distance * sin, yaw)
                .with_options(options)
                .with_precision(PRECISION)
                .build()
        })
        .collect()
}

/// Straight-line generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineGenerator;

impl WaypointGenerator for LineGenerator {
    type Output = Vec<Waypoint>;

    fn name(&self) -> &'static str {
        "line"
    }

    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError> {
        let Some(start) = context.interaction_data().point(START_POINT)? else {
            debug!("no start_point defined, returning an empty list");
            return Ok(Vec::new());
        };
        let params = LineParams::from_properties(context.properties())?;
        let waypoints = plan(&start, params);
        debug!(waypoints = waypoints.len(), "generated waypoints along line");
        Ok(waypoints)
    }
}

/// Describes the line generator to the host.
#[must_use]
pub fn manifest() -> PluginManifest {
    PluginManifest::new("Line Generator", "wpt-line-generator")
        .with_input(InputDef::new(START_POINT, "Start Point", InputKind::Point))
        .with_property(PropertyDef::new(
            "num_points",
            PropertyKind::Int,
            DEFAULT_NUM_POINTS,
            "Number of waypoints to place",
        ))
        .with_property(PropertyDef::new(
            "spacing",
            PropertyKind::Float,
            DEFAULT_SPACING,
            "Distance between waypoints (m)",
        ))
}

#[cfg(test)]
mod tests;
