//! Binary entrypoint for the rectangle sweep waypoint plugin.

use std::process::ExitCode;

use wpt_generators::GeneratorKind;

fn main() -> ExitCode {
    let kind = GeneratorKind::RectSweep;
    wpt_plugin_sdk::run_process(&kind, &kind.manifest())
}
