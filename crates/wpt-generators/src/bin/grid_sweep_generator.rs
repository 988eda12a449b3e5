//! Binary entrypoint for the grid sweep waypoint plugin.

use std::process::ExitCode;

use wpt_generators::GeneratorKind;

fn main() -> ExitCode {
    let kind = GeneratorKind::GridSweep;
    wpt_plugin_sdk::run_process(&kind, &kind.manifest())
}
