//! Unit tests for the line generator.

use std::f64::consts::FRAC_PI_2;

use rstest::rstest;
use serde_json::json;
use wpt_plugin_sdk::testing::{assert_close, assert_close_within, context, positions};
use wpt_plugin_sdk::{Context, GenerateError, Point, WaypointGenerator};

use super::*;

fn params(num_points: i64, spacing: f64) -> LineParams {
    let context = Context::new()
        .with_property("num_points", num_points)
        .with_property("spacing", spacing);
    LineParams::from_properties(context.properties()).expect("valid params")
}

#[test]
fn missing_start_point_yields_empty_list() {
    let generated = LineGenerator
        .generate(&context(r#"{"properties": {"num_points": 3}}"#))
        .expect("generate");
    assert!(generated.is_empty());
}

#[test]
fn empty_start_point_object_counts_as_missing() {
    let generated = LineGenerator
        .generate(&context(r#"{"interaction_data": {"start_point": {}}}"#))
        .expect("generate");
    assert!(generated.is_empty());
}

#[test]
fn places_points_along_the_x_axis() {
    let generated = LineGenerator
        .generate(&context(
            r#"{"properties": {"num_points": 3, "spacing": 2.0},
                "interaction_data": {"start_point": {"x": 0, "y": 0, "qw": 1}}}"#,
        ))
        .expect("generate");

    assert_eq!(positions(&generated), vec![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
    for waypoint in &generated {
        assert_close(waypoint.yaw(), 0.0);
    }
}

#[test]
fn follows_the_start_heading() {
    let start = Point::new(1.0, 1.0, FRAC_PI_2);
    let generated = plan(&start, params(3, 1.5));

    let xs: Vec<f64> = generated.iter().map(Waypoint::x).collect();
    let ys: Vec<f64> = generated.iter().map(Waypoint::y).collect();
    assert_eq!(xs, vec![1.0, 1.0, 1.0]);
    assert_eq!(ys, vec![1.0, 2.5, 4.0]);
    for waypoint in &generated {
        assert_close_within(waypoint.yaw(), FRAC_PI_2, 1e-5);
    }
}

#[test]
fn stamps_provenance_and_line_index() {
    let generated = plan(&Point::default(), params(2, 1.0));
    for (index, waypoint) in generated.iter().enumerate() {
        assert_eq!(waypoint.option("generated_by"), Some(&json!(GENERATED_BY)));
        assert_eq!(waypoint.option("line_index"), Some(&json!(index)));
    }
}

#[rstest]
#[case::zero(0, 1)]
#[case::negative(-4, 1)]
#[case::one(1, 1)]
#[case::several(7, 7)]
fn num_points_is_at_least_one(#[case] requested: i64, #[case] expected: u32) {
    assert_eq!(params(requested, 1.0).num_points(), expected);
}

#[rstest]
#[case::zero(0.0, MIN_SPACING)]
#[case::negative(-2.0, MIN_SPACING)]
#[case::at_threshold(0.01, MIN_SPACING)]
#[case::above(0.5, 0.5)]
fn spacing_is_clamped_to_minimum(#[case] requested: f64, #[case] expected: f64) {
    assert_close(params(3, requested).spacing(), expected);
}

#[test]
fn defaults_apply_without_properties() {
    let defaults = LineParams::from_properties(Context::new().properties()).expect("defaults");
    assert_eq!(defaults.num_points(), 5);
    assert_close(defaults.spacing(), 1.0);
}

#[test]
fn loose_property_values_are_converted() {
    let context = Context::new()
        .with_property("num_points", "4")
        .with_property("spacing", 2.9);
    let parsed = LineParams::from_properties(context.properties()).expect("loose values");
    assert_eq!(parsed.num_points(), 4);
    assert_close(parsed.spacing(), 2.9);
}

#[test]
fn malformed_property_is_an_error() {
    let context = context(
        r#"{"properties": {"num_points": "many"},
            "interaction_data": {"start_point": {"x": 0}}}"#,
    );
    let error = LineGenerator.generate(&context).expect_err("bad num_points");
    assert!(matches!(error, GenerateError::Context(_)));
    assert!(error.to_string().contains("num_points"));
}

#[test]
fn manifest_declares_start_point() {
    let manifest = manifest();
    assert!(manifest.validate().is_ok());
    assert_eq!(manifest.inputs().first().map(InputDef::id), Some(START_POINT));
    assert!(manifest.property("spacing").is_some());
}
