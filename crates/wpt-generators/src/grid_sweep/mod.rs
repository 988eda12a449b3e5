//! Boustrophedon sweep over an axis-aligned area.
//!
//! Columns advance along X from `min.x` in steps of `spacing`. Even columns
//! run up from `min.y`, odd columns run down from `max.y`. Every waypoint
//! faces yaw 0.
//!
//! Column parity is `floor((x - min.x) / spacing) mod 2` evaluated on the
//! accumulated `x`. For spacings that do not divide the width evenly the
//! floor can land one column early under float error.

use tracing::debug;
use wpt_plugin_sdk::{
    Context, GenerateError, InputDef, InputKind, PluginManifest, PropertyDef, PropertyKind,
    Properties, SweepArea, Waypoint, WaypointBuilder, WaypointGenerator, provenance,
};

/// Interaction input holding the area to cover.
pub const SWEEP_AREA: &str = "sweep_area";

/// Provenance stamped on every waypoint.
pub const GENERATED_BY: &str = "GridSweepPlugin";

/// Smallest distance between rows and columns.
pub const MIN_SPACING: f64 = 0.05;

const DEFAULT_SPACING: f64 = 1.0;
const PRECISION: u32 = 2;

/// Reads `spacing`, clamped to [`MIN_SPACING`].
///
/// # Errors
///
/// Returns [`GenerateError`] when the property is not numeric.
pub fn spacing(properties: &Properties) -> Result<f64, GenerateError> {
    let requested = properties.f64("spacing", DEFAULT_SPACING)?;
    Ok(if requested <= MIN_SPACING {
        MIN_SPACING
    } else {
        requested
    })
}

/// Whether the column starting at `x` runs from `max.y` down to `min.y`.
#[must_use]
pub fn is_descending_column(x: f64, min_x: f64, spacing: f64) -> bool {
    ((x - min_x) / spacing).floor().rem_euclid(2.0) >= 1.0
}

/// Walks the area column by column.
#[must_use]
pub fn plan(area: &SweepArea, spacing: f64) -> Vec<Waypoint> {
    let SweepArea { min, max } = *area;
    let mut waypoints = Vec::new();
    let mut x = min.x;

    while x <= max.x {
        let descending = is_descending_column(x, min.x, spacing);
        let (mut y, step) = if descending {
            (max.y, -spacing)
        } else {
            (min.y, spacing)
        };

        while min.y <= y && y <= max.y {
            waypoints.push(
                WaypointBuilder::new(x, y, 0.0)
                    .with_options(provenance(GENERATED_BY))
                    .with_precision(PRECISION)
                    .build(),
            );
            let next_y = y + step;
            // float resolution exhausted
            if next_y == y {
                break;
            }
            y = next_y;
        }

        let next_x = x + spacing;
        if next_x <= x {
            break;
        }
        x = next_x;
    }
    waypoints
}

/// Grid sweep generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSweepGenerator;

impl WaypointGenerator for GridSweepGenerator {
    type Output = Vec<Waypoint>;

    fn name(&self) -> &'static str {
        "grid_sweep"
    }

    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError> {
        let Some(area) = context.interaction_data().sweep_area(SWEEP_AREA)? else {
            debug!("no sweep_area defined, returning an empty list");
            return Ok(Vec::new());
        };
        let waypoints = plan(&area, spacing(context.properties())?);
        debug!(waypoints = waypoints.len(), "generated grid sweep");
        Ok(waypoints)
    }
}

/// Describes the grid sweep generator to the host.
#[must_use]
pub fn manifest() -> PluginManifest {
    PluginManifest::new("Grid Sweep", "wpt-grid-sweep-generator")
        .with_input(InputDef::new(SWEEP_AREA, "Sweep Area", InputKind::Rectangle))
        .with_property(PropertyDef::new(
            "spacing",
            PropertyKind::Float,
            DEFAULT_SPACING,
            "Distance between rows and columns (m)",
        ))
}

#[cfg(test)]
mod tests;
