//! Process boundary shared by every plugin binary.
//!
//! [`run_process`] is the only place that turns a failure into stderr text
//! and a non-zero exit status. Everything below it returns structured
//! errors.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::PluginConfig;
use crate::error::{ManifestError, RuntimeError};
use crate::generator::WaypointGenerator;
use crate::manifest::PluginManifest;
use crate::runtime::{self, RunSummary};
use crate::telemetry::{self, TelemetryError};

/// Failures that end a plugin process with a non-zero status.
#[derive(Debug, Error)]
pub enum EntrypointError {
    /// Telemetry could not be configured.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// The compiled-in manifest is inconsistent.
    #[error("invalid plugin manifest: {0}")]
    Manifest(#[from] ManifestError),
    /// The protocol run failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// What a successful invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest was printed; stdin was not read.
    Manifest,
    /// One context was turned into a waypoint list.
    Generated(RunSummary),
}

/// Parses the process arguments, initialises telemetry and serves one
/// request on the standard streams.
#[must_use]
pub fn run_process<G: WaypointGenerator>(generator: &G, manifest: &PluginManifest) -> ExitCode {
    let config = PluginConfig::parse();
    let result = telemetry::initialise(&config)
        .map_err(EntrypointError::from)
        .and_then(|_| {
            telemetry::plugin_span(generator.name(), manifest.version()).in_scope(|| {
                let stdin = io::stdin();
                let stdout = io::stdout();
                execute(
                    &config,
                    generator,
                    manifest,
                    &mut stdin.lock(),
                    &mut stdout.lock(),
                )
            })
        });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(failure) => {
            error!(generator = generator.name(), error = %failure, "plugin run failed");
            writeln!(io::stderr().lock(), "{failure}").ok();
            ExitCode::FAILURE
        }
    }
}

/// Serves one invocation against the given streams.
///
/// With `--manifest` the manifest is written and `input` is left unread.
/// Otherwise one context is read from `input` and the waypoints are
/// written to `output`.
///
/// # Errors
///
/// Returns [`EntrypointError`] if the manifest is invalid or the protocol
/// run fails.
pub fn execute<G: WaypointGenerator>(
    config: &PluginConfig,
    generator: &G,
    manifest: &PluginManifest,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<Outcome, EntrypointError> {
    if config.manifest_requested() {
        write_manifest(manifest, output)?;
        return Ok(Outcome::Manifest);
    }

    let summary = runtime::run(generator, input, output)?;
    debug!(
        generator = generator.name(),
        waypoints = summary.waypoint_count(),
        "plugin run complete"
    );
    Ok(Outcome::Generated(summary))
}

/// Validates `manifest` and writes it as one JSON line.
///
/// # Errors
///
/// Returns [`EntrypointError::Manifest`] for an inconsistent manifest and
/// [`EntrypointError::Runtime`] if encoding or writing fails.
pub fn write_manifest(
    manifest: &PluginManifest,
    output: &mut impl Write,
) -> Result<(), EntrypointError> {
    manifest.validate()?;
    let mut payload =
        serde_json::to_string(manifest).map_err(|source| RuntimeError::Serialize { source })?;
    payload.push('\n');
    output
        .write_all(payload.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| RuntimeError::Write { source })?;
    Ok(())
}
