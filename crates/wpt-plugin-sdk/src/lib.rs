//! Host protocol and shared helpers for waypoint generator plugins.
//!
//! A waypoint plugin is a short-lived process spawned by the host
//! application once per generation request. The host writes one JSON
//! [`Context`] document to the plugin's stdin and closes it. The plugin
//! computes an ordered list of poses and writes one JSON array of
//! [`Waypoint`] records to stdout. Stderr is the diagnostic channel: it
//! carries log events and failure reports and is never parsed as data.
//!
//! # Architecture
//!
//! Generators implement [`WaypointGenerator`], a single stateless
//! `generate(context)` call. [`runtime::run`] owns everything around that
//! call: decoding the context, wrapping non-sequence results, validating
//! the output shape without mutating it, and encoding the result exactly
//! once. [`entrypoint::run_process`] is the process boundary that turns a
//! [`RuntimeError`] into stderr text and a non-zero exit status.
//!
//! # Example
//!
//! ```
//! use wpt_plugin_sdk::{Context, GenerateError, Waypoint, WaypointGenerator, make_waypoint};
//!
//! struct Origin;
//!
//! impl WaypointGenerator for Origin {
//!     type Output = Vec<Waypoint>;
//!
//!     fn name(&self) -> &'static str {
//!         "origin"
//!     }
//!
//!     fn generate(&self, _context: &Context) -> Result<Self::Output, GenerateError> {
//!         Ok(vec![make_waypoint(0.0, 0.0, 0.0, None)])
//!     }
//! }
//!
//! let mut input = std::io::Cursor::new(br#"{"properties": {}}"#.to_vec());
//! let mut output = Vec::new();
//! wpt_plugin_sdk::runtime::run(&Origin, &mut input, &mut output).expect("run succeeds");
//! assert!(String::from_utf8_lossy(&output).starts_with("[{\"transform\""));
//! ```

pub mod config;
pub mod entrypoint;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod orientation;
pub mod protocol;
pub mod runtime;
pub mod telemetry;
pub mod validation;
pub mod waypoint;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use self::config::{DEFAULT_LOG_FILTER, LogFormat, PluginConfig};
pub use self::entrypoint::{EntrypointError, Outcome, run_process};
pub use self::error::{ContextError, GenerateError, ManifestError, RuntimeError};
pub use self::generator::WaypointGenerator;
pub use self::manifest::{
    InputDef, InputKind, PluginManifest, PropertyDef, PropertyKind, SDK_VERSION,
};
pub use self::orientation::{
    PlanarFrame, Quaternion, normalize_yaw, quaternion_to_yaw, yaw_to_quaternion,
};
pub use self::protocol::{
    AreaCorner, Context, InteractionData, Point, Position, Properties, Rectangle, SweepArea,
    Transform, Waypoint, WaypointOptions,
};
pub use self::runtime::RunSummary;
pub use self::telemetry::{TelemetryError, TelemetryHandle};
pub use self::validation::{FindingKind, FindingLevel, ValidationFinding};
pub use self::waypoint::{DEFAULT_PRECISION, WaypointBuilder, make_waypoint, provenance};
