use super::*;

#[test]
fn missing_input_uses_form_notice() {
    assert_eq!(ClientError::from(ValidationError::MissingName).notice(), NOTICE_MISSING_INPUT);
    assert_eq!(ClientError::from(ValidationError::MissingSurface).notice(), NOTICE_MISSING_INPUT);
}

#[test]
fn oversize_drawing_has_its_own_notice() {
    let err = ClientError::from(ValidationError::DrawingTooLarge { size: 10, max: 5 });
    assert_eq!(err.notice(), NOTICE_TOO_LARGE);
    assert_eq!(err.to_string(), "validation failed: drawing is 10 bytes, limit is 5");
}

#[test]
fn submission_and_export_failures_share_retry_notice() {
    let api = ClientError::Submission(ApiError::Status { status: 500, message: "Failed to create RSVP".into() });
    assert_eq!(api.notice(), "Failed to submit RSVP. Please try again.");
    let export = ClientError::from(ExportError::Encode("boom".into()));
    assert_eq!(export.notice(), NOTICE_SUBMIT_FAILED);
}

#[test]
fn notice_hides_transport_detail() {
    let err = ClientError::Fetch(ApiError::Request("connection refused at 10.0.0.1".into()));
    assert_eq!(err.notice(), NOTICE_FETCH_FAILED);
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn in_flight_notice() {
    assert_eq!(ClientError::SubmissionInFlight.notice(), NOTICE_IN_FLIGHT);
}
