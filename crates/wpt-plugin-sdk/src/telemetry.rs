//! Structured telemetry initialisation for plugin processes.
//!
//! Events always go to stderr. Stdout is reserved for the waypoint payload
//! and must never carry log lines. Every event raised while serving a
//! request sits inside a [`plugin_span`] naming the generator, so a host
//! collecting stderr from several plugins can tell them apart.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Span, Subscriber, info_span, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{LogFormat, PluginConfig};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Repeated calls are idempotent: only the first invocation installs a
/// subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter directive and
/// [`TelemetryError::Subscriber`] if another subscriber is already global.
pub fn initialise(config: &PluginConfig) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| TelemetryHandle)
}

/// Parses a filter directive without installing anything.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when the directive is malformed.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|error| TelemetryError::Filter(error.to_string()))
}

/// Span wrapping one plugin invocation.
///
/// Create it after [`initialise`]; a span built before a subscriber is
/// installed stays disabled.
#[must_use]
pub fn plugin_span(generator: &str, version: &str) -> Span {
    info_span!("plugin", generator, version)
}

fn install_subscriber(config: &PluginConfig) -> Result<(), TelemetryError> {
    let filter = parse_filter(config.log_filter())?;

    let builder = |env_filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_timer(fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}
