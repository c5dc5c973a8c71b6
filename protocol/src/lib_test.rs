use super::*;
use time::macros::datetime;

fn sample_submission() -> Submission {
    Submission {
        id: Uuid::nil(),
        name: "Sam".to_owned(),
        drawing: "data:image/png;base64,AAE=".to_owned(),
        created_at: datetime!(2025-01-18 14:00:00 UTC),
    }
}

#[test]
fn submission_serializes_with_camel_case_timestamp() {
    let json = serde_json::to_value(sample_submission()).expect("serialize");
    assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(json["name"], "Sam");
    assert_eq!(json["drawing"], "data:image/png;base64,AAE=");
    assert_eq!(json["createdAt"], "2025-01-18T14:00:00Z");
    assert!(json.get("created_at").is_none());
}

#[test]
fn submission_deserializes_server_record() {
    let json = r#"{
        "id": "6f1c1b9e-8a55-4a47-9d8c-0a6d8f7f3b21",
        "name": "Alice",
        "drawing": "data:image/png;base64,AAE=",
        "createdAt": "2025-01-18T14:00:00.250Z"
    }"#;
    let sub: Submission = serde_json::from_str(json).expect("deserialize");
    assert_eq!(sub.name, "Alice");
    assert_eq!(sub.created_at, datetime!(2025-01-18 14:00:00.25 UTC));
}

#[test]
fn submission_missing_field_is_rejected() {
    let json = r#"{"id":"6f1c1b9e-8a55-4a47-9d8c-0a6d8f7f3b21","name":"Alice","drawing":"x"}"#;
    assert!(serde_json::from_str::<Submission>(json).is_err());
}

#[test]
fn new_submission_requires_both_fields() {
    assert!(serde_json::from_str::<NewSubmission>(r#"{"name":"Alice"}"#).is_err());
    assert!(serde_json::from_str::<NewSubmission>(r#"{"drawing":"x"}"#).is_err());
    let ok: NewSubmission = serde_json::from_str(r#"{"name":"","drawing":"x"}"#).expect("presence only");
    assert_eq!(ok.name, "");
}

#[test]
fn error_body_shape() {
    let json = serde_json::to_string(&ErrorBody::new(CREATE_FAILED_MESSAGE)).expect("serialize");
    assert_eq!(json, r#"{"error":"Failed to create RSVP"}"#);
}
