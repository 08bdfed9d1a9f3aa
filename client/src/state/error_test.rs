use super::*;
use serde_json::json;

#[test]
fn text_passes_through() {
    let payload = ErrorPayload::from("Error: unable to get current greet value.");
    assert_eq!(payload.message(), "Error: unable to get current greet value.");
}

#[test]
fn error_field_wins_over_message() {
    let payload = ErrorPayload::from(json!({"error": "idpiframe_initialization_failed", "message": "ignored"}));
    assert_eq!(payload.message(), "idpiframe_initialization_failed");
}

#[test]
fn message_field_used_when_error_missing() {
    let payload = ErrorPayload::from(json!({"message": "gapi is not defined", "name": "ReferenceError"}));
    assert_eq!(payload.message(), "gapi is not defined");
}

#[test]
fn falsy_error_field_falls_through_to_message() {
    let payload = ErrorPayload::from(json!({"error": "", "message": "session expired"}));
    assert_eq!(payload.message(), "session expired");
}

#[test]
fn non_string_error_field_is_rendered_as_json() {
    let payload = ErrorPayload::from(json!({"error": {"code": 7}}));
    assert_eq!(payload.message(), r#"{"code":7}"#);
}

#[test]
fn remaining_fields_are_concatenated_with_line_breaks() {
    let payload = ErrorPayload::from(json!({"details": "Not a valid origin", "code": 401}));
    let message = payload.message();
    assert!(message.contains("Not a valid origin\n"));
    assert!(message.contains("401\n"));
    assert_eq!(message.lines().count(), 2);
}

#[test]
fn empty_object_yields_empty_message() {
    assert_eq!(ErrorPayload::from(json!({})).message(), "");
}

#[test]
fn array_values_are_concatenated() {
    assert_eq!(ErrorPayload::from(json!(["a", "b"])).message(), "a\nb\n");
}

#[test]
fn scalar_values_become_text() {
    assert_eq!(ErrorPayload::from(json!("plain")), ErrorPayload::Text("plain".to_owned()));
    assert_eq!(ErrorPayload::from(json!(12)).message(), "12");
    assert_eq!(ErrorPayload::from(Value::Null).message(), "");
}

#[test]
fn display_matches_message() {
    let payload = ErrorPayload::from(json!({"message": "boom"}));
    assert_eq!(payload.to_string(), "boom");
}
