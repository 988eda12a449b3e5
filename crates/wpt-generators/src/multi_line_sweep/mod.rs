//! Parallel sweep lines anchored at a clicked pose.
//!
//! The local frame has +X along the start heading and +Y to its left.
//! Line `i` sits at local Y `i · pitch_y` and runs from X 0 to `pitch_x`,
//! or back again on odd lines when the snake pattern is on.

use std::f64::consts::{FRAC_PI_2, PI};

use serde_json::json;
use tracing::debug;
use wpt_plugin_sdk::{
    Context, GenerateError, InputDef, InputKind, PlanarFrame, PluginManifest, Point, PropertyDef,
    PropertyKind, Properties, Waypoint, WaypointBuilder, WaypointGenerator, normalize_yaw,
    provenance,
};

use crate::count_from;

/// Interaction input holding the origin and base heading.
pub const START_POINT: &str = "start_point";

/// Provenance stamped on every waypoint.
pub const GENERATED_BY: &str = "SweepGenerator";

const DEFAULT_PITCH_X: f64 = 10.0;
const DEFAULT_PITCH_Y: f64 = 1.0;
const DEFAULT_NUM_LINES: i64 = 5;
const PRECISION: u32 = 3;

/// Parameters read from the context properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepParams {
    /// Length of every line along local X.
    pub pitch_x: f64,
    /// Offset between neighbouring lines along local Y.
    pub pitch_y: f64,
    /// Number of lines; negative requests produce none.
    pub num_lines: u32,
    /// Reverse odd lines.
    pub snake_pattern: bool,
    /// Turn end points around. Only read without the snake pattern.
    pub flip_endpoint_yaw: bool,
    /// Point end points at the next line. Only read with the snake pattern.
    pub endpoint_faces_next: bool,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            pitch_x: DEFAULT_PITCH_X,
            pitch_y: DEFAULT_PITCH_Y,
            num_lines: count_from(DEFAULT_NUM_LINES),
            snake_pattern: false,
            flip_endpoint_yaw: false,
            endpoint_faces_next: false,
        }
    }
}

impl SweepParams {
    /// Reads every sweep parameter with its default.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when a property cannot be converted.
    pub fn from_properties(properties: &Properties) -> Result<Self, GenerateError> {
        Ok(Self {
            pitch_x: properties.f64("pitch_x", DEFAULT_PITCH_X)?,
            pitch_y: properties.f64("pitch_y", DEFAULT_PITCH_Y)?,
            num_lines: count_from(properties.i64("num_lines", DEFAULT_NUM_LINES)?),
            snake_pattern: properties.bool("snake_pattern", false)?,
            flip_endpoint_yaw: properties.bool("flip_endpoint_yaw", false)?,
            endpoint_faces_next: properties.bool("endpoint_faces_next", false)?,
        })
    }

    /// Whether line `index` runs against the base heading.
    #[must_use]
    pub const fn is_reverse_pass(&self, index: u32) -> bool {
        self.snake_pattern && index % 2 == 1
    }

    /// Headings of the start and end point of line `index`, normalised.
    #[must_use]
    pub fn line_yaws(&self, base_yaw: f64, index: u32) -> (f64, f64) {
        let (start, end) = if self.snake_pattern {
            let travel = if self.is_reverse_pass(index) {
                base_yaw + PI
            } else {
                base_yaw
            };
            let end = if self.endpoint_faces_next {
                base_yaw + FRAC_PI_2
            } else {
                travel
            };
            (travel, end)
        } else {
            let end = if self.flip_endpoint_yaw {
                base_yaw + PI
            } else {
                base_yaw
            };
            (base_yaw, end)
        };
        (normalize_yaw(start), normalize_yaw(end))
    }
}

/// Lays out `num_lines` lines from `start`.
#[must_use]
pub fn plan(start: &Point, params: SweepParams) -> Vec<Waypoint> {
    let base_yaw = start.yaw();
    let frame = PlanarFrame::new(start.x, start.y, base_yaw);

    (0..params.num_lines)
        .flat_map(|index| {
            let local_y = f64::from(index) * params.pitch_y;
            let (from_x, to_x) = if params.is_reverse_pass(index) {
                (params.pitch_x, 0.0)
            } else {
                (0.0, params.pitch_x)
            };
            let (start_yaw, end_yaw) = params.line_yaws(base_yaw, index);

            [(from_x, start_yaw), (to_x, end_yaw)].map(|(local_x, yaw)| {
                let (x, y) = frame.to_world(local_x, local_y);
                let mut options = provenance(GENERATED_BY);
                options.insert(String::from("sweep_line_id"), json!(index));
                WaypointBuilder::new(x, y, yaw)
                    .with_options(options)
                    .with_precision(PRECISION)
                    .build()
            })
        })
        .collect()
}

/// Multi-line sweep generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiLineSweepGenerator;

impl WaypointGenerator for MultiLineSweepGenerator {
    type Output = Vec<Waypoint>;

    fn name(&self) -> &'static str {
        "multi_line_sweep"
    }

    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError> {
        let Some(start) = context.interaction_data().point(START_POINT)? else {
            debug!("no start_point defined, returning an empty list");
            return Ok(Vec::new());
        };
        let params = SweepParams::from_properties(context.properties())?;
        let waypoints = plan(&start, params);
        debug!(
            waypoints = waypoints.len(),
            lines = params.num_lines,
            "generated multi-line sweep"
        );
        Ok(waypoints)
    }
}

/// Describes the multi-line sweep generator to the host.
#[must_use]
pub fn manifest() -> PluginManifest {
    PluginManifest::new("Sweep Path Generator", "wpt-sweep-generator")
        .with_input(InputDef::new(START_POINT, "Start Point", InputKind::Point))
        .with_property(PropertyDef::new(
            "pitch_x",
            PropertyKind::Float,
            DEFAULT_PITCH_X,
            "Length of each sweep line (m)",
        ))
        .with_property(PropertyDef::new(
            "pitch_y",
            PropertyKind::Float,
            DEFAULT_PITCH_Y,
            "Distance between sweep lines (m)",
        ))
        .with_property(PropertyDef::new(
            "num_lines",
            PropertyKind::Int,
            DEFAULT_NUM_LINES,
            "Number of sweep lines",
        ))
        .with_property(PropertyDef::new(
            "snake_pattern",
            PropertyKind::Bool,
            false,
            "Reverse every other line",
        ))
        .with_property(PropertyDef::new(
            "flip_endpoint_yaw",
            PropertyKind::Bool,
            false,
            "Turn line end points around (normal mode)",
        ))
        .with_property(PropertyDef::new(
            "endpoint_faces_next",
            PropertyKind::Bool,
            false,
            "Face line end points toward the next line (snake mode)",
        ))
}
