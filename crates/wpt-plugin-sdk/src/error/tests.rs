//! Unit tests for plugin error types.

use std::error::Error as _;

use rstest::rstest;

use super::*;

#[test]
fn invalid_property_message_names_property_and_value() {
    let error = ContextError::invalid_property("spacing", "a finite number", &Value::from("wide"));
    let message = error.to_string();
    assert!(
        message.contains("spacing"),
        "expected name in message: {message}"
    );
    assert!(
        message.contains("\"wide\""),
        "expected rejected value in message: {message}"
    );
}

#[test]
fn context_errors_pass_through_generate_error_unchanged() {
    let context_error = ContextError::InvalidInteraction {
        id: "sweep_rect".into(),
        expected: "rectangle",
        message: "invalid type: string".into(),
    };
    let expected = context_error.to_string();
    let error = GenerateError::from(context_error);
    assert_eq!(error.to_string(), expected);
}

#[test]
fn generate_failure_is_wrapped_with_generator_name() {
    let error = RuntimeError::Generate {
        generator: "line",
        source: GenerateError::failed("boom"),
    };
    let message = error.to_string();
    assert!(message.contains("'line'"), "missing name: {message}");
    assert!(message.contains("boom"), "missing cause: {message}");
    assert!(error.source().is_some());
}

#[rstest]
#[case::empty_name(ManifestError::EmptyName, "empty")]
#[case::missing_executable(
    ManifestError::MissingExecutable { name: "line".into() },
    "executable"
)]
#[case::duplicate_input(
    ManifestError::DuplicateInput { name: "line".into(), id: "start_point".into() },
    "start_point"
)]
#[case::duplicate_property(
    ManifestError::DuplicateProperty { name: "line".into(), property: "spacing".into() },
    "spacing"
)]
fn manifest_error_messages_name_the_offender(
    #[case] error: ManifestError,
    #[case] expected: &str,
) {
    let message = error.to_string();
    assert!(
        message.contains(expected),
        "expected '{expected}' in message: {message}"
    );
}
