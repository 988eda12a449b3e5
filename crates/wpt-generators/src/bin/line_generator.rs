//! Binary entrypoint for the line waypoint plugin.

use std::process::ExitCode;

use wpt_generators::GeneratorKind;

fn main() -> ExitCode {
    let kind = GeneratorKind::Line;
    wpt_plugin_sdk::run_process(&kind, &kind.manifest())
}
