//! Waypoint generators for robot navigation paths.
//!
//! Four independent, stateless strategies turn a user-drawn primitive and a
//! handful of scalar properties into an ordered list of poses:
//!
//! - [`line::LineGenerator`] places points along a clicked heading.
//! - [`grid_sweep::GridSweepGenerator`] covers an axis-aligned area column
//!   by column.
//! - [`rect_sweep::RectSweepGenerator`] sweeps a rotated rectangle.
//! - [`multi_line_sweep::MultiLineSweepGenerator`] lays parallel lines out
//!   from a clicked pose.
//!
//! [`GeneratorKind`] selects one of them statically; each plugin binary
//! binds a single variant and hands it to
//! [`wpt_plugin_sdk::run_process`].
//!
//! # Example
//!
//! ```
//! use wpt_generators::GeneratorKind;
//! use wpt_plugin_sdk::{Context, WaypointGenerator};
//!
//! let context = Context::new()
//!     .with_property("num_points", 3)
//!     .with_interaction("start_point", serde_json::json!({"x": 1.0, "y": 2.0}));
//! let waypoints = GeneratorKind::Line.generate(&context).expect("valid context");
//! assert_eq!(waypoints.len(), 3);
//! ```

use strum::{Display, EnumIter, EnumString};
use wpt_plugin_sdk::{Context, GenerateError, PluginManifest, Waypoint, WaypointGenerator};

pub mod grid_sweep;
pub mod line;
pub mod multi_line_sweep;
pub mod rect_sweep;

#[cfg(test)]
mod tests;

/// The generator a plugin binary is built around.
///
/// # Example
///
/// ```
/// use wpt_generators::GeneratorKind;
///
/// let kind: GeneratorKind = "rect_sweep".parse().expect("known generator");
/// assert_eq!(kind.manifest().executable(), "wpt-rect-sweep-generator");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum GeneratorKind {
    /// Straight line from a start point.
    Line,
    /// Axis-aligned boustrophedon over an area.
    GridSweep,
    /// Boustrophedon inside a rotated rectangle.
    RectSweep,
    /// Parallel lines anchored at a start point.
    MultiLineSweep,
}

impl GeneratorKind {
    /// Manifest the host reads for this generator.
    #[must_use]
    pub fn manifest(self) -> PluginManifest {
        match self {
            Self::Line => line::manifest(),
            Self::GridSweep => grid_sweep::manifest(),
            Self::RectSweep => rect_sweep::manifest(),
            Self::MultiLineSweep => multi_line_sweep::manifest(),
        }
    }
}

impl WaypointGenerator for GeneratorKind {
    type Output = Vec<Waypoint>;

    fn name(&self) -> &'static str {
        match self {
            Self::Line => line::LineGenerator.name(),
            Self::GridSweep => grid_sweep::GridSweepGenerator.name(),
            Self::RectSweep => rect_sweep::RectSweepGenerator.name(),
            Self::MultiLineSweep => multi_line_sweep::MultiLineSweepGenerator.name(),
        }
    }

    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError> {
        match self {
            Self::Line => line::LineGenerator.generate(context),
            Self::GridSweep => grid_sweep::GridSweepGenerator.generate(context),
            Self::RectSweep => rect_sweep::RectSweepGenerator.generate(context),
            Self::MultiLineSweep => multi_line_sweep::MultiLineSweepGenerator.generate(context),
        }
    }
}

/// Converts a requested count into a loop bound; negatives become zero.
pub(crate) fn count_from(requested: i64) -> u32 {
    u32::try_from(requested.max(0)).unwrap_or(u32::MAX)
}
