//! Unit tests for the grid sweep generator.

use rstest::rstest;
use serde_json::json;
use wpt_plugin_sdk::testing::{assert_close, context};
use wpt_plugin_sdk::{AreaCorner, Context, GenerateError, WaypointGenerator};

use super::*;

fn area(min: (f64, f64), max: (f64, f64)) -> SweepArea {
    SweepArea {
        min: AreaCorner { x: min.0, y: min.1 },
        max: AreaCorner { x: max.0, y: max.1 },
    }
}

fn column(waypoints: &[Waypoint], x: f64) -> Vec<f64> {
    waypoints
        .iter()
        .filter(|waypoint| (waypoint.x() - x).abs() < 1e-9)
        .map(Waypoint::y)
        .collect()
}

#[test]
fn missing_area_yields_empty_list() {
    let generated = GridSweepGenerator
        .generate(&Context::new())
        .expect("generate");
    assert!(generated.is_empty());
}

#[test]
fn columns_alternate_direction() {
    let generated = GridSweepGenerator
        .generate(&context(
            r#"{"properties": {"spacing": 1.0},
                "interaction_data": {"sweep_area": {"min": {"x": 0, "y": 0}, "max": {"x": 2, "y": 2}}}}"#,
        ))
        .expect("generate");

    assert_eq!(generated.len(), 9);
    assert_eq!(column(&generated, 0.0), vec![0.0, 1.0, 2.0]);
    assert_eq!(column(&generated, 1.0), vec![2.0, 1.0, 0.0]);
    assert_eq!(column(&generated, 2.0), vec![0.0, 1.0, 2.0]);
}

#[test]
fn every_waypoint_faces_yaw_zero_with_provenance() {
    let generated = plan(&area((0.0, 0.0), (1.0, 1.0)), 0.5);
    assert!(!generated.is_empty());
    for waypoint in &generated {
        assert_close(waypoint.yaw(), 0.0);
        assert_eq!(waypoint.option("generated_by"), Some(&json!(GENERATED_BY)));
        assert!(waypoint.option("line_index").is_none());
    }
}

#[test]
fn coordinates_are_rounded_to_centimetres() {
    let generated = plan(&area((0.123_456, 0.0), (0.2, 0.0)), 1.0);
    assert_eq!(generated.len(), 1);
    let waypoint = generated.first().expect("one waypoint");
    assert_close(waypoint.x(), 0.12);
}

#[test]
fn inverted_area_yields_nothing() {
    assert!(plan(&area((5.0, 0.0), (1.0, 2.0)), 1.0).is_empty());
    assert!(plan(&area((0.0, 5.0), (2.0, 1.0)), 1.0).is_empty());
}

#[test]
fn degenerate_area_yields_single_point() {
    let generated = plan(&area((3.0, 4.0), (3.0, 4.0)), 1.0);
    assert_eq!(generated.len(), 1);
}

#[rstest]
#[case::zero(0.0, MIN_SPACING)]
#[case::negative(-1.0, MIN_SPACING)]
#[case::at_threshold(0.05, MIN_SPACING)]
#[case::above(0.25, 0.25)]
fn spacing_is_clamped(#[case] requested: f64, #[case] expected: f64) {
    let context = Context::new().with_property("spacing", requested);
    assert_close(spacing(context.properties()).expect("spacing"), expected);
}

#[test]
fn tiny_spacing_still_terminates() {
    let context = Context::new()
        .with_property("spacing", 0.0)
        .with_interaction(
            SWEEP_AREA,
            json!({"min": {"x": 0, "y": 0}, "max": {"x": 0.1, "y": 0.1}}),
        );
    let generated = GridSweepGenerator.generate(&context).expect("generate");
    assert!(!generated.is_empty());
    assert!(generated.len() <= 9);
}

#[rstest]
#[case(0.0, false)]
#[case(1.0, true)]
#[case(2.0, false)]
#[case(3.5, true)]
fn parity_follows_floor_of_column_offset(#[case] x: f64, #[case] descending: bool) {
    assert_eq!(is_descending_column(x, 0.0, 1.0), descending);
}

#[test]
fn corner_without_coordinates_is_malformed() {
    let context = Context::new().with_interaction(SWEEP_AREA, json!({"min": {"x": 0}}));
    let error = GridSweepGenerator
        .generate(&context)
        .expect_err("corner lacks y");
    assert!(matches!(error, GenerateError::Context(_)));
}

#[test]
fn missing_corners_take_the_default_area() {
    let context = Context::new().with_interaction(SWEEP_AREA, json!({"label": "whole map"}));
    let generated = GridSweepGenerator.generate(&context).expect("generate");
    assert_eq!(generated.len(), 121);
}
