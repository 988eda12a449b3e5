//! Unit tests for the rectangle sweep generator.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use proptest::prelude::*;
use rstest::{fixture, rstest};
use serde_json::json;
use wpt_plugin_sdk::testing::{assert_close, assert_close_within, context, positions};
use wpt_plugin_sdk::{Context, Position, WaypointGenerator};

use super::*;

const YAW_TOLERANCE: f64 = 1e-5;

fn rect(width: f64, height: f64, yaw: f64) -> Rectangle {
    Rectangle {
        center: Position { x: 0.0, y: 0.0 },
        width,
        height,
        yaw,
    }
}

fn params(properties: serde_json::Value) -> RectSweepParams {
    let context = context(&json!({ "properties": properties }).to_string());
    RectSweepParams::from_properties(context.properties()).expect("valid params")
}

#[fixture]
fn defaults() -> RectSweepParams {
    params(json!({}))
}

#[test]
fn missing_rectangle_yields_empty_list() {
    let generated = RectSweepGenerator
        .generate(&Context::new())
        .expect("generate");
    assert!(generated.is_empty());
}

#[rstest]
#[case::both_tiny(0.005, 0.005)]
#[case::narrow(0.005, 4.0)]
#[case::short(4.0, 0.009)]
fn degenerate_rectangles_yield_nothing(
    defaults: RectSweepParams,
    #[case] width: f64,
    #[case] height: f64,
) {
    assert!(plan(&rect(width, height, 0.0), defaults).is_empty());
}

#[rstest]
#[case(2, 4)]
#[case(4, 8)]
#[case(7, 14)]
fn emits_two_waypoints_per_line(#[case] num_lines: i64, #[case] expected: usize) {
    let generated = plan(
        &rect(10.0, 6.0, 0.3),
        params(json!({ "num_lines": num_lines })),
    );
    assert_eq!(generated.len(), expected);
}

#[rstest]
#[case(1)]
#[case(0)]
#[case(-3)]
fn num_lines_is_raised_to_two(#[case] requested: i64) {
    assert_eq!(params(json!({ "num_lines": requested })).num_lines(), MIN_LINES);
}

#[test]
fn single_line_spacing_is_zero() {
    assert_close(line_spacing(5.0, 1), 0.0);
    assert_close(line_spacing(5.0, 0), 0.0);
    assert_close(line_spacing(5.0, 3), 5.0);
}

#[rstest]
fn default_layout_starts_bottom_left_and_snakes(defaults: RectSweepParams) {
    assert_eq!(defaults.start_corner(), StartCorner::BottomLeft);
    assert_eq!(defaults.direction(), SweepDirection::Horizontal);
    assert!(defaults.snake());

    let generated = plan(&rect(4.0, 2.0, 0.0), params(json!({ "num_lines": 3 })));
    assert_eq!(
        positions(&generated),
        vec![
            (-2.0, 1.0),
            (2.0, 1.0),
            (2.0, 0.0),
            (-2.0, 0.0),
            (-2.0, -1.0),
            (2.0, -1.0),
        ]
    );

    let yaws: Vec<f64> = generated.iter().map(Waypoint::yaw).collect();
    for (yaw, expected) in yaws.iter().zip([0.0, 0.0, PI, PI, 0.0, 0.0]) {
        assert_close_within(*yaw, expected, YAW_TOLERANCE);
    }
}

#[test]
fn start_and_end_are_labelled_per_line() {
    let generated = plan(&rect(4.0, 2.0, 0.0), params(json!({ "num_lines": 2 })));
    let labels: Vec<_> = generated
        .iter()
        .map(|waypoint| {
            (
                waypoint.option("sweep_line_id").cloned(),
                waypoint.option("position").cloned(),
            )
        })
        .collect();
    assert_eq!(
        labels,
        vec![
            (Some(json!(0)), Some(json!("start"))),
            (Some(json!(0)), Some(json!("end"))),
            (Some(json!(1)), Some(json!("start"))),
            (Some(json!(1)), Some(json!("end"))),
        ]
    );
    assert!(
        generated
            .iter()
            .all(|waypoint| waypoint.option("generated_by") == Some(&json!(GENERATED_BY)))
    );
}

#[test]
fn vertical_sweep_from_top_right_without_snake() {
    let generated = plan(
        &rect(2.0, 4.0, 0.0),
        params(json!({
            "num_lines": 2,
            "snake_pattern": false,
            "start_corner": "Top-Right",
            "sweep_direction": "Vertical",
        })),
    );
    assert_eq!(
        positions(&generated),
        vec![(1.0, -2.0), (1.0, 2.0), (-1.0, -2.0), (-1.0, 2.0)]
    );
    for waypoint in &generated {
        assert_close_within(waypoint.yaw(), FRAC_PI_2, YAW_TOLERANCE);
    }
}

#[test]
fn rectangle_yaw_rotates_every_position() {
    let layout = params(json!({ "num_lines": 3 }));
    let straight = positions(&plan(&rect(4.0, 2.0, 0.0), layout));
    let rotated = positions(&plan(&rect(4.0, 2.0, FRAC_PI_4), layout));

    assert_eq!(straight.len(), rotated.len());
    for (before, after) in straight.iter().zip(&rotated) {
        assert_ne!(before, after);
    }
}

#[test]
fn travel_yaw_includes_rectangle_rotation() {
    let generated = plan(&rect(4.0, 2.0, FRAC_PI_2), params(json!({ "num_lines": 2 })));
    let first = generated.first().expect("first waypoint");
    assert_close_within(first.yaw(), FRAC_PI_2, YAW_TOLERANCE);
    assert_close(first.x(), -1.0);
    assert_close(first.y(), -2.0);
}

#[test]
fn centre_offsets_the_whole_pattern() {
    let shifted = Rectangle {
        center: Position { x: 10.0, y: -5.0 },
        ..rect(4.0, 2.0, 0.0)
    };
    let generated = plan(&shifted, params(json!({ "num_lines": 2 })));
    assert_eq!(generated.first().map(|w| (w.x(), w.y())), Some((8.0, -4.0)));
}

#[rstest]
#[case("Bottom-Left", StartCorner::BottomLeft)]
#[case("Top-Left", StartCorner::TopLeft)]
#[case("Bottom-Right", StartCorner::BottomRight)]
#[case("Top-Right", StartCorner::TopRight)]
#[case("BottomLeft", StartCorner::BottomLeft)]
#[case("somewhere", StartCorner::TopRight)]
fn start_corner_matches_by_substring(#[case] label: &str, #[case] expected: StartCorner) {
    assert_eq!(StartCorner::from_label(label), expected);
}

#[rstest]
#[case("Horizontal", SweepDirection::Horizontal)]
#[case("Vertical", SweepDirection::Vertical)]
#[case("horizontal", SweepDirection::Vertical)]
fn sweep_direction_requires_exact_horizontal(
    #[case] label: &str,
    #[case] expected: SweepDirection,
) {
    assert_eq!(SweepDirection::from_label(label), expected);
}

#[test]
fn rectangle_fields_default_when_absent() {
    let context = Context::new()
        .with_property("num_lines", 2)
        .with_interaction(SWEEP_RECT, json!({"yaw": 0.0}));
    let generated = RectSweepGenerator.generate(&context).expect("generate");
    assert_eq!(generated.first().map(|w| (w.x(), w.y())), Some((-5.0, 5.0)));
}

#[test]
fn manifest_lists_corner_and_direction_choices() {
    let manifest = manifest();
    assert!(manifest.validate().is_ok());
    let corner = manifest.property("start_corner").expect("start_corner");
    assert_eq!(
        corner.options(),
        ["Bottom-Left", "Top-Left", "Bottom-Right", "Top-Right"]
    );
    assert_eq!(corner.default_value(), &json!("Bottom-Left"));
    let direction = manifest.property("sweep_direction").expect("sweep_direction");
    assert_eq!(direction.options(), ["Horizontal", "Vertical"]);
}

proptest! {
    #[test]
    fn output_size_is_twice_the_line_count(
        num_lines in 2_i64..40,
        width in 0.01_f64..100.0,
        height in 0.01_f64..100.0,
        yaw in -PI..PI,
    ) {
        let generated = plan(&rect(width, height, yaw), params(json!({ "num_lines": num_lines })));
        prop_assert_eq!(i64::try_from(generated.len()).ok(), Some(2 * num_lines));
    }

    #[test]
    fn every_emitted_yaw_is_normalised(
        yaw in -10.0_f64..10.0,
        snake in any::<bool>(),
    ) {
        let generated = plan(
            &rect(3.0, 2.0, yaw),
            params(json!({ "num_lines": 3, "snake_pattern": snake })),
        );
        for waypoint in &generated {
            let heading = waypoint.yaw();
            prop_assert!(heading > -PI && heading <= PI);
        }
    }
}
