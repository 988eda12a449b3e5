//! Dispatch tests and behaviour scenarios for the generator family.

use std::collections::HashSet;

use rstest::rstest;
use serde_json::json;
use strum::IntoEnumIterator;
use wpt_plugin_sdk::{Context, GenerateError, WaypointGenerator};

use crate::GeneratorKind;


#[rstest]
#[case("line", GeneratorKind::Line)]
#[case("grid_sweep", GeneratorKind::GridSweep)]
#[case("rect_sweep", GeneratorKind::RectSweep)]
#[case("multi_line_sweep", GeneratorKind::MultiLineSweep)]
fn kinds_parse_and_name_consistently(#[case] text: &str, #[case] kind: GeneratorKind) {
    assert_eq!(text.parse::<GeneratorKind>().ok(), Some(kind));
    assert_eq!(kind.to_string(), text);
    assert_eq!(kind.name(), text);
}

#[test]
fn every_kind_returns_nothing_without_interaction_data() {
    for kind in GeneratorKind::iter() {
        let generated = kind.generate(&Context::new()).expect("empty context");
        assert!(generated.is_empty(), "{kind} produced output");
    }
}

fn with_every_input(value: &serde_json::Value) -> Context {
    Context::new()
        .with_interaction("start_point", value.clone())
        .with_interaction("sweep_area", value.clone())
        .with_interaction("sweep_rect", value.clone())
}

#[test]
fn every_kind_treats_empty_list_input_as_missing() {
    let context = with_every_input(&json!([]));
    for kind in GeneratorKind::iter() {
        let generated = kind.generate(&context).expect("empty list input");
        assert!(generated.is_empty(), "{kind} produced output");
    }
}

#[test]
fn every_kind_rejects_list_shaped_input() {
    let context = with_every_input(&json!([3, 4]));
    for kind in GeneratorKind::iter() {
        let error = kind.generate(&context).expect_err("list input should fail");
        assert!(matches!(error, GenerateError::Context(_)), "{kind}: {error}");
    }
}

#[test]
fn every_manifest_is_valid_and_distinct() {
    let mut executables = HashSet::new();
    for kind in GeneratorKind::iter() {
        let manifest = kind.manifest();
        assert!(manifest.validate().is_ok(), "{kind}");
        assert_eq!(manifest.version(), wpt_plugin_sdk::SDK_VERSION);
        assert!(manifest.needs().is_empty());
        assert!(executables.insert(manifest.executable().to_owned()));
    }
    assert_eq!(executables.len(), 4);
}

#[test]
fn count_from_saturates() {
    assert_eq!(crate::count_from(-1), 0);
    assert_eq!(crate::count_from(3), 3);
    assert_eq!(crate::count_from(i64::MAX), u32::MAX);
}
