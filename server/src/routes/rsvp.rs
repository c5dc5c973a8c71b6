//! RSVP create/list routes.
//!
//! Every failure answers 500 with one fixed message per operation. The real
//! cause (bad JSON, missing field, store error) is logged here and never
//! returned.

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod rsvp_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::Json;
use protocol::{CREATE_FAILED_MESSAGE, ErrorBody, LIST_FAILED_MESSAGE, NewSubmission, Submission};
use tracing::{error, info, warn};

use crate::services::rsvp::StoreError;
use crate::state::AppState;

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(ErrorBody::new(message)))
}

/// `POST /api/rsvp`: store a submission and echo the stored record.
///
/// The body is decoded as JSON whatever its `Content-Type` says.
pub async fn create_rsvp(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Submission>, ApiError> {
    let new = decode_new_submission(body)?;

    let created = state.store.create(new).await.map_err(|e| {
        error!(error = %e, "rsvp create failed");
        api_error(store_error_to_status(&e), CREATE_FAILED_MESSAGE)
    })?;

    info!(id = %created.id, "rsvp created");
    Ok(Json(created))
}

fn decode_new_submission(body: Result<Bytes, BytesRejection>) -> Result<NewSubmission, ApiError> {
    let bytes = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected rsvp create body");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED_MESSAGE)
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!(error = %e, "malformed rsvp create body");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, CREATE_FAILED_MESSAGE)
    })
}

/// `GET /api/rsvp`: all submissions, newest first.
pub async fn list_rsvps(State(state): State<AppState>) -> Result<Json<Vec<Submission>>, ApiError> {
    let rows = state.store.list().await.map_err(|e| {
        error!(error = %e, "rsvp list failed");
        api_error(store_error_to_status(&e), LIST_FAILED_MESSAGE)
    })?;

    Ok(Json(rows))
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
