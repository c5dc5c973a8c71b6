//! Client configuration: where the API lives and how much it accepts.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_MAX_DRAWING_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the RSVP server, without a trailing slash.
    pub base_url: String,
    /// Largest drawing data URI, in bytes, that will be sent.
    pub max_drawing_bytes: usize,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_drawing_bytes: DEFAULT_MAX_DRAWING_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Default limits against a specific server.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), ..Self::default() }
    }
}
