//! RSVP API transport.
//!
//! `RsvpApi` is the seam the submission flow depends on; `HttpApi` is the
//! reqwest implementation. Response parsing is done on the text body so
//! status handling and decoding stay in one place.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(test)]
#[path = "api_mock_test.rs"]
pub mod mock;

use protocol::{ErrorBody, HEALTH_PATH, NewSubmission, RSVP_PATH, Submission};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Create/list contract of the persistence boundary.
#[async_trait::async_trait]
pub trait RsvpApi: Send + Sync {
    /// `POST /api/rsvp`.
    async fn create(&self, new: &NewSubmission) -> Result<Submission, ApiError>;

    /// `GET /api/rsvp`, newest first.
    async fn list(&self) -> Result<Vec<Submission>, ApiError>;
}

// =============================================================================
// HTTP
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if reqwest cannot build the
    /// client (e.g. TLS backend initialization).
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the server is unreachable or unhealthy.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url(HEALTH_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { status: status.as_u16(), message: status.to_string() })
        }
    }
}

#[async_trait::async_trait]
impl RsvpApi for HttpApi {
    async fn create(&self, new: &NewSubmission) -> Result<Submission, ApiError> {
        let response = self
            .http
            .post(self.url(RSVP_PATH))
            .json(new)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(response).await
    }

    async fn list(&self) -> Result<Vec<Submission>, ApiError> {
        let response = self
            .http
            .get(self.url(RSVP_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    parse_body(status, &text)
}

/// Interpret a response: 2xx bodies decode as `T`, anything else becomes
/// [`ApiError::Status`] carrying the server's `error` message when present.
pub(crate) fn parse_body<T: DeserializeOwned>(status: u16, text: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(text).map_or_else(|_| text.to_owned(), |body| body.error);
        return Err(ApiError::Status { status, message });
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}
