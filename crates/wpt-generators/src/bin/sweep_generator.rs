//! Binary entrypoint for the multi-line sweep waypoint plugin.

use std::process::ExitCode;

use wpt_generators::GeneratorKind;

fn main() -> ExitCode {
    let kind = GeneratorKind::MultiLineSweep;
    wpt_plugin_sdk::run_process(&kind, &kind.manifest())
}
