//! One-shot protocol driver: context in, waypoint list out.
//!
//! [`run`] reads the whole input channel, decodes one [`Context`], calls the
//! bound generator once, validates the encoded items and writes the JSON
//! array to the output channel in a single write. Any failure before that
//! write leaves the output channel untouched.

use std::io::{Read, Write};

use serde_json::Value;
use tracing::debug;

use crate::error::RuntimeError;
use crate::generator::WaypointGenerator;
use crate::protocol::Context;
use crate::validation::{self, ValidationFinding};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    waypoint_count: usize,
    findings: Vec<ValidationFinding>,
    short_circuited: bool,
}

impl RunSummary {
    /// Number of items written to the output channel.
    #[must_use]
    pub const fn waypoint_count(&self) -> usize {
        self.waypoint_count
    }

    /// Validation findings reported while checking the output.
    #[must_use]
    pub fn findings(&self) -> &[ValidationFinding] {
        &self.findings
    }

    /// Whether the input was blank and the generator never ran.
    #[must_use]
    pub const fn short_circuited(&self) -> bool {
        self.short_circuited
    }
}

/// Drives one context-to-waypoints cycle.
///
/// Blank input produces `[]` without calling the generator.
///
/// # Errors
///
/// Returns [`RuntimeError`] when the input cannot be read or decoded, when
/// the generator fails, or when the output cannot be encoded or written.
pub fn run<G: WaypointGenerator>(
    generator: &G,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<RunSummary, RuntimeError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|source| RuntimeError::Read { source })?;

    if text.trim().is_empty() {
        debug!(
            generator = generator.name(),
            "empty context, emitting an empty list"
        );
        write_payload(output, &[])?;
        return Ok(RunSummary {
            short_circuited: true,
            ..RunSummary::default()
        });
    }

    let context: Context =
        serde_json::from_str(&text).map_err(|source| RuntimeError::Decode { source })?;
    let items = generate_items(generator, &context)?;
    let findings = validation::validate_output(&items);
    write_payload(output, &items)?;

    debug!(
        generator = generator.name(),
        waypoints = items.len(),
        findings = findings.len(),
        "waypoint list written"
    );
    Ok(RunSummary {
        waypoint_count: items.len(),
        findings,
        short_circuited: false,
    })
}

/// Calls the generator and encodes its result as a sequence of JSON items.
///
/// # Errors
///
/// Returns [`RuntimeError::Generate`] if the generator fails and
/// [`RuntimeError::Serialize`] if its output cannot be encoded.
pub fn generate_items<G: WaypointGenerator>(
    generator: &G,
    context: &Context,
) -> Result<Vec<Value>, RuntimeError> {
    let output = generator
        .generate(context)
        .map_err(|source| RuntimeError::Generate {
            generator: generator.name(),
            source,
        })?;
    let encoded =
        serde_json::to_value(output).map_err(|source| RuntimeError::Serialize { source })?;
    Ok(into_sequence(encoded))
}

/// Treats an array as the sequence itself and wraps any other value.
#[must_use]
pub fn into_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        single => vec![single],
    }
}

pub(crate) fn write_payload(output: &mut impl Write, items: &[Value]) -> Result<(), RuntimeError> {
    let mut payload =
        serde_json::to_string(items).map_err(|source| RuntimeError::Serialize { source })?;
    payload.push('\n');
    output
        .write_all(payload.as_bytes())
        .map_err(|source| RuntimeError::Write { source })?;
    output
        .flush()
        .map_err(|source| RuntimeError::Write { source })
}
