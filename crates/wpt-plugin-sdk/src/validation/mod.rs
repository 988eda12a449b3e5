//! Shape checks over a generator's encoded output.
//!
//! Validation is advisory. It reads the encoded items, reports findings on
//! the diagnostic channel and hands the items back untouched; nothing is
//! dropped, rewritten or treated as fatal.

use std::fmt;

use serde_json::Value;
use tracing::{info, warn};

/// How loudly a finding is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingLevel {
    /// Likely a generator bug.
    Warning,
    /// Accepted, but not the canonical shape.
    Info,
}

/// What was wrong with an output item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// The item is not a JSON object.
    NotAnObject,
    /// `transform` is present but is not an object.
    TransformNotAnObject,
    /// `transform` lacks a positional key.
    TransformMissing {
        /// The missing key, `x` or `y`.
        key: &'static str,
    },
    /// The item uses the legacy flat `{x, y, yaw}` layout.
    LegacyFlatShape,
    /// Neither `transform` nor flat `x`/`y` is present.
    NoPositionalData,
}

impl FindingKind {
    /// Severity attached to this kind of finding.
    #[must_use]
    pub const fn level(self) -> FindingLevel {
        match self {
            Self::LegacyFlatShape => FindingLevel::Info,
            _ => FindingLevel::Warning,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("is not an object"),
            Self::TransformNotAnObject => f.write_str("has a transform that is not an object"),
            Self::TransformMissing { key } => write!(f, "transform missing '{key}'"),
            Self::LegacyFlatShape => f.write_str(
                "uses legacy flat format; prefer the transform format built by make_waypoint",
            ),
            Self::NoPositionalData => f.write_str("has no positional data (x/y or transform)"),
        }
    }
}

/// One observation about one output item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFinding {
    index: usize,
    kind: FindingKind,
}

impl ValidationFinding {
    /// Position of the item in the output sequence.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// What was observed.
    #[must_use]
    pub const fn kind(&self) -> FindingKind {
        self.kind
    }

    /// Severity of the observation.
    #[must_use]
    pub const fn level(&self) -> FindingLevel {
        self.kind.level()
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waypoint [{}] {}", self.index, self.kind)
    }
}

/// Inspects every item and returns the findings without logging them.
#[must_use]
pub fn inspect(items: &[Value]) -> Vec<ValidationFinding> {
    items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| {
            inspect_item(item)
                .into_iter()
                .map(move |kind| ValidationFinding { index, kind })
        })
        .collect()
}

/// Inspects every item and reports each finding as a tracing event.
#[must_use]
pub fn validate_output(items: &[Value]) -> Vec<ValidationFinding> {
    let findings = inspect(items);
    for finding in &findings {
        match finding.level() {
            FindingLevel::Warning => warn!(index = finding.index(), "{finding}"),
            FindingLevel::Info => info!(index = finding.index(), "{finding}"),
        }
    }
    findings
}

fn inspect_item(item: &Value) -> Vec<FindingKind> {
    let Value::Object(fields) = item else {
        return vec![FindingKind::NotAnObject];
    };

    if let Some(transform) = fields.get("transform") {
        let Value::Object(pose) = transform else {
            return vec![FindingKind::TransformNotAnObject];
        };
        return ["x", "y"]
            .into_iter()
            .filter(|key| !pose.contains_key(*key))
            .map(|key| FindingKind::TransformMissing { key })
            .collect();
    }

    if fields.contains_key("x") && fields.contains_key("y") {
        vec![FindingKind::LegacyFlatShape]
    } else {
        vec![FindingKind::NoPositionalData]
    }
}
