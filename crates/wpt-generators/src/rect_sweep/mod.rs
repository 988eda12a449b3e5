//! Boustrophedon sweep inside a rotated rectangle.
//!
//! Lines are laid out in the rectangle's local frame (origin at the centre,
//! axes un-rotated) and mapped to the world with
//! `world = centre + R(yaw) · local`. The sweep axis is the one lines run
//! along; the step axis is the one lines are offset along. Each line emits
//! a `start` and an `end` waypoint that both face the line's direction of
//! travel, so the output always holds exactly `2 · num_lines` records.

use serde_json::json;
use strum::{Display, VariantNames};
use tracing::debug;
use wpt_plugin_sdk::{
    Context, GenerateError, InputDef, InputKind, PlanarFrame, PluginManifest, PropertyDef,
    PropertyKind, Properties, Rectangle, Waypoint, WaypointBuilder, WaypointGenerator, provenance,
};

use crate::count_from;

/// Interaction input holding the rectangle.
pub const SWEEP_RECT: &str = "sweep_rect";

/// Provenance stamped on every waypoint.
pub const GENERATED_BY: &str = "RectSweepGenerator";

/// Rectangles narrower or shorter than this produce no waypoints.
pub const MIN_DIMENSION: f64 = 0.01;

/// Fewest lines a sweep is laid out with.
pub const MIN_LINES: u32 = 2;

const DEFAULT_NUM_LINES: i64 = 5;
const PRECISION: u32 = 6;

/// Corner the first line starts from.
///
/// Property values are matched by substring: any text containing `Left`
/// starts on the negative local X side, any text containing `Bottom` starts
/// on the positive local Y side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, VariantNames)]
pub enum StartCorner {
    /// Negative local X, positive local Y.
    #[default]
    #[strum(serialize = "Bottom-Left")]
    BottomLeft,
    /// Negative local X, negative local Y.
    #[strum(serialize = "Top-Left")]
    TopLeft,
    /// Positive local X, positive local Y.
    #[strum(serialize = "Bottom-Right")]
    BottomRight,
    /// Positive local X, negative local Y.
    #[strum(serialize = "Top-Right")]
    TopRight,
}

impl StartCorner {
    /// Interprets a property value leniently.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match (label.contains("Left"), label.contains("Bottom")) {
            (true, true) => Self::BottomLeft,
            (true, false) => Self::TopLeft,
            (false, true) => Self::BottomRight,
            (false, false) => Self::TopRight,
        }
    }

    /// Sign of the first line's local X coordinate.
    #[must_use]
    pub const fn x_sign(self) -> f64 {
        match self {
            Self::BottomLeft | Self::TopLeft => -1.0,
            Self::BottomRight | Self::TopRight => 1.0,
        }
    }

    /// Sign of the first line's local Y coordinate.
    #[must_use]
    pub const fn y_sign(self) -> f64 {
        match self {
            Self::BottomLeft | Self::BottomRight => 1.0,
            Self::TopLeft | Self::TopRight => -1.0,
        }
    }
}

/// Axis the sweep lines run along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, VariantNames)]
pub enum SweepDirection {
    /// Lines run along local X and step along local Y.
    #[default]
    Horizontal,
    /// Lines run along local Y and step along local X.
    Vertical,
}

impl SweepDirection {
    /// Interprets a property value: only `Horizontal` selects horizontal.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "Horizontal" {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Parameters read from the context properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSweepParams {
    num_lines: u32,
    snake: bool,
    start_corner: StartCorner,
    direction: SweepDirection,
}

impl RectSweepParams {
    /// Reads the sweep parameters, raising `num_lines` to [`MIN_LINES`].
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] when a property cannot be converted.
    pub fn from_properties(properties: &Properties) -> Result<Self, GenerateError> {
        let num_lines = properties
            .i64("num_lines", DEFAULT_NUM_LINES)?
            .max(i64::from(MIN_LINES));
        let start_corner = properties.string("start_corner", &StartCorner::default().to_string())?;
        let direction =
            properties.string("sweep_direction", &SweepDirection::default().to_string())?;
        Ok(Self {
            num_lines: count_from(num_lines),
            snake: properties.bool("snake_pattern", true)?,
            start_corner: StartCorner::from_label(&start_corner),
            direction: SweepDirection::from_label(&direction),
        })
    }

    /// Number of lines after clamping.
    #[must_use]
    pub const fn num_lines(&self) -> u32 {
        self.num_lines
    }

    /// Whether odd lines reverse direction.
    #[must_use]
    pub const fn snake(&self) -> bool {
        self.snake
    }

    /// Corner of the first line.
    #[must_use]
    pub const fn start_corner(&self) -> StartCorner {
        self.start_corner
    }

    /// Axis the lines run along.
    #[must_use]
    pub const fn direction(&self) -> SweepDirection {
        self.direction
    }
}

/// Offset between neighbouring lines along the step axis.
///
/// A single line sits at the start offset, so its spacing is zero.
#[must_use]
pub fn line_spacing(step_half: f64, num_lines: u32) -> f64 {
    if num_lines > 1 {
        2.0 * step_half / f64::from(num_lines - 1)
    } else {
        0.0
    }
}

/// One sweep line in the rectangle's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LocalLine {
    start: (f64, f64),
    end: (f64, f64),
}

impl LocalLine {
    fn heading(&self) -> f64 {
        (self.end.1 - self.start.1).atan2(self.end.0 - self.start.0)
    }
}

fn local_lines(rect: &Rectangle, params: RectSweepParams) -> impl Iterator<Item = LocalLine> {
    let horizontal = params.direction == SweepDirection::Horizontal;
    let (half_w, half_h) = (rect.width / 2.0, rect.height / 2.0);
    let (sweep_half, step_half) = if horizontal {
        (half_w, half_h)
    } else {
        (half_h, half_w)
    };
    let corner = params.start_corner;
    let (sweep_sign, step_sign) = if horizontal {
        (corner.x_sign(), corner.y_sign())
    } else {
        (corner.y_sign(), corner.x_sign())
    };
    let spacing = line_spacing(step_half, params.num_lines);
    let snake = params.snake;

    (0..params.num_lines).map(move |index| {
        let step_pos = step_sign * step_half - step_sign * f64::from(index) * spacing;
        let reversed = snake && index % 2 == 1;
        let near = sweep_sign * sweep_half;
        let (from, to) = if reversed { (-near, near) } else { (near, -near) };
        if horizontal {
            LocalLine {
                start: (from, step_pos),
                end: (to, step_pos),
            }
        } else {
            LocalLine {
                start: (step_pos, from),
                end: (step_pos, to),
            }
        }
    })
}

/// Lays out the sweep, or returns nothing for a degenerate rectangle.
#[must_use]
pub fn plan(rect: &Rectangle, params: RectSweepParams) -> Vec<Waypoint> {
    if rect.width < MIN_DIMENSION || rect.height < MIN_DIMENSION {
        return Vec::new();
    }

    let frame = PlanarFrame::new(rect.center.x, rect.center.y, rect.yaw);
    local_lines(rect, params)
        .zip(0_u32..)
        .flat_map(|(line, index)| {
            let yaw = frame.heading_to_world(line.heading());
            [("start", line.start), ("end", line.end)].map(|(position, (lx, ly))| {
                let (x, y) = frame.to_world(lx, ly);
                let mut options = provenance(GENERATED_BY);
                options.insert(String::from("sweep_line_id"), json!(index));
                options.insert(String::from("position"), json!(position));
                WaypointBuilder::new(x, y, yaw)
                    .with_options(options)
                    .with_precision(PRECISION)
                    .build()
            })
        })
        .collect()
}

/// Rotated rectangle sweep generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectSweepGenerator;

impl WaypointGenerator for RectSweepGenerator {
    type Output = Vec<Waypoint>;

    fn name(&self) -> &'static str {
        "rect_sweep"
    }

    fn generate(&self, context: &Context) -> Result<Self::Output, GenerateError> {
        let Some(rect) = context.interaction_data().rectangle(SWEEP_RECT)? else {
            debug!("no sweep_rect defined, returning an empty list");
            return Ok(Vec::new());
        };
        let params = RectSweepParams::from_properties(context.properties())?;
        let waypoints = plan(&rect, params);
        debug!(
            waypoints = waypoints.len(),
            lines = params.num_lines(),
            corner = %params.start_corner(),
            direction = %params.direction(),
            "generated rect sweep"
        );
        Ok(waypoints)
    }
}

/// Describes the rectangle sweep generator to the host.
#[must_use]
pub fn manifest() -> PluginManifest {
    PluginManifest::new("Rect Sweep", "wpt-rect-sweep-generator")
        .with_input(InputDef::new(SWEEP_RECT, "Sweep Rectangle", InputKind::Rectangle))
        .with_property(PropertyDef::new(
            "num_lines",
            PropertyKind::Int,
            DEFAULT_NUM_LINES,
            "Number of parallel sweep lines",
        ))
        .with_property(PropertyDef::new(
            "snake_pattern",
            PropertyKind::Bool,
            true,
            "Reverse every other line",
        ))
        .with_property(
            PropertyDef::new(
                "start_corner",
                PropertyKind::String,
                StartCorner::default().to_string(),
                "Corner the first line starts from",
            )
            .with_options(StartCorner::VARIANTS.iter().copied()),
        )
        .with_property(
            PropertyDef::new(
                "sweep_direction",
                PropertyKind::String,
                SweepDirection::default().to_string(),
                "Axis the lines run along",
            )
            .with_options(SweepDirection::VARIANTS.iter().copied()),
        )
}

#[cfg(test)]
mod tests;
