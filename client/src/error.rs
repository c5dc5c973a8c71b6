//! Client error taxonomy and the notices shown for each.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recoverable. Callers show [`ClientError::notice`] to the
//! user and log the `Display` form, which carries the detail.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use canvas::ExportError;

pub const NOTICE_MISSING_INPUT: &str = "Please enter your name and draw something";
pub const NOTICE_TOO_LARGE: &str = "Your drawing is too large to submit. Please clear it and try again.";
pub const NOTICE_SUBMIT_FAILED: &str = "Failed to submit RSVP. Please try again.";
pub const NOTICE_FETCH_FAILED: &str = "Failed to load RSVPs.";
pub const NOTICE_IN_FLIGHT: &str = "Your RSVP is already being sent.";

/// Transport-level failure talking to the RSVP API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    /// The request never produced a response (connect, timeout, ...).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is empty")]
    MissingName,
    #[error("no drawing surface is mounted")]
    MissingSurface,
    #[error("drawing is {size} bytes, limit is {max}")]
    DrawingTooLarge { size: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("drawing export failed: {0}")]
    Export(#[from] ExportError),
    #[error("submission failed: {0}")]
    Submission(ApiError),
    #[error("fetch failed: {0}")]
    Fetch(ApiError),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

impl ClientError {
    /// Short user-facing message. Never includes internal detail.
    #[must_use]
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::DrawingTooLarge { .. }) => NOTICE_TOO_LARGE,
            Self::Validation(_) => NOTICE_MISSING_INPUT,
            Self::Export(_) | Self::Submission(_) => NOTICE_SUBMIT_FAILED,
            Self::Fetch(_) => NOTICE_FETCH_FAILED,
            Self::SubmissionInFlight => NOTICE_IN_FLIGHT,
        }
    }
}
