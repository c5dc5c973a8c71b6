//! Shared wire model for the RSVP create/list API.
//!
//! This crate owns the JSON representation used by both `server` and
//! `client`: the stored [`Submission`] record, the [`NewSubmission`] create
//! payload, and the generic [`ErrorBody`] returned on any failure. Drawings
//! travel as self-describing data URIs, see [`data_uri`].

pub mod data_uri;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub use data_uri::{DataUri, DataUriError, PNG_MEDIA_TYPE};

/// Path serving both `POST` (create) and `GET` (list).
pub const RSVP_PATH: &str = "/api/rsvp";

/// Liveness probe path.
pub const HEALTH_PATH: &str = "/healthz";

/// Error message returned for any failed create.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create RSVP";

/// Error message returned for any failed list.
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch RSVPs";

/// A stored RSVP. Identity and timestamp are assigned by the server.
///
/// Field names on the wire are `id`, `name`, `drawing`, `createdAt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Server-assigned identifier, never reused.
    pub id: Uuid,
    /// Display name as typed by the submitter.
    pub name: String,
    /// PNG drawing encoded as a data URI.
    pub drawing: String,
    /// Server-assigned creation time; the only sort key.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubmission {
    pub name: String,
    pub drawing: String,
}

/// Body returned alongside a non-success status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
