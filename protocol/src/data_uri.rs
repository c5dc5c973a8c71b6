//! `data:` URI codec for drawings.
//!
//! Only the base64 form is supported; drawings are binary PNG payloads and the
//! percent-encoded form never occurs on this wire.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Media type every exported drawing declares.
pub const PNG_MEDIA_TYPE: &str = "image/png";

/// Media type assumed when the header omits one (RFC 2397).
const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Error returned by [`DataUri::parse`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    #[error("missing `data:` scheme")]
    MissingScheme,
    #[error("missing `,` between header and payload")]
    MissingSeparator,
    #[error("payload is not declared as base64")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A decoded data URI: declared media type plus raw payload bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl DataUri {
    #[must_use]
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self { media_type: media_type.into(), data }
    }

    /// Wrap encoded PNG bytes.
    #[must_use]
    pub fn png(data: Vec<u8>) -> Self {
        Self::new(PNG_MEDIA_TYPE, data)
    }

    /// Whether the declared media type is `image/png` (case-insensitive).
    #[must_use]
    pub fn is_png(&self) -> bool {
        self.media_type.eq_ignore_ascii_case(PNG_MEDIA_TYPE)
    }

    /// Parse `data:<media-type>[;param]*;base64,<payload>`.
    ///
    /// # Errors
    ///
    /// Returns a [`DataUriError`] when the scheme, separator or base64 marker
    /// is missing, or the payload does not decode.
    pub fn parse(input: &str) -> Result<Self, DataUriError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingSeparator)?;

        let mut params = header.split(';');
        let media_type = params
            .next()
            .map(str::trim)
            .filter(|mt| !mt.is_empty())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
            .to_owned();
        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(DataUriError::NotBase64);
        }

        let data = STANDARD.decode(payload.trim())?;
        Ok(Self { media_type, data })
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.media_type, STANDARD.encode(&self.data))
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "data_uri_test.rs"]
mod tests;
