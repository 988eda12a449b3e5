//! Process configuration shared by every plugin binary.
//!
//! Settings resolve once per process from command-line flags with
//! environment fallbacks. There is no configuration file: the host spawns
//! plugins with a clean argument list and steers logging through the
//! environment.

use clap::Parser;
use strum::{Display, EnumString};

/// Filter applied when neither flag nor environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Supported logging output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Command-line interface shared by the waypoint plugins.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use wpt_plugin_sdk::{LogFormat, PluginConfig};
///
/// let config = PluginConfig::parse_from(["wpt-line-generator", "--log-format", "JSON"]);
/// assert_eq!(config.log_format(), LogFormat::Json);
/// assert!(!config.manifest_requested());
/// ```
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    version,
    about = "Reads a JSON context on stdin and writes a JSON waypoint list on stdout."
)]
pub struct PluginConfig {
    /// Prints the plugin manifest and exits without reading stdin.
    #[arg(long)]
    manifest: bool,
    /// Tracing filter directive, for example `wpt_generators=debug`.
    #[arg(long, env = "WPT_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
    /// Layout of diagnostic events on stderr: `compact` or `json`.
    #[arg(long, env = "WPT_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            manifest: false,
            log_filter: String::from(DEFAULT_LOG_FILTER),
            log_format: LogFormat::default(),
        }
    }
}

impl PluginConfig {
    /// Whether the manifest should be printed instead of running.
    #[must_use]
    pub const fn manifest_requested(&self) -> bool {
        self.manifest
    }

    /// Tracing filter directive.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Layout of diagnostic events.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Overrides the tracing filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Overrides the event layout.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}
