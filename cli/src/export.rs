//! Gallery export: decode drawing data URIs into PNG files.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use protocol::{DataUri, DataUriError, Submission};

#[derive(Debug, thiserror::Error)]
pub enum DrawingError {
    #[error("drawing is not a data URI: {0}")]
    DataUri(#[from] DataUriError),
    #[error("drawing is `{0}`, not image/png")]
    NotPng(String),
}

/// PNG bytes of a submission's drawing.
///
/// # Errors
///
/// Returns [`DrawingError`] when the drawing is not a base64 PNG data URI.
pub fn decode_drawing(submission: &Submission) -> Result<Vec<u8>, DrawingError> {
    let uri = DataUri::parse(&submission.drawing)?;
    if !uri.is_png() {
        return Err(DrawingError::NotPng(uri.media_type));
    }
    Ok(uri.data)
}

/// `<position>-<name>-<id prefix>.png`, safe on any filesystem.
#[must_use]
pub fn file_name(position: usize, submission: &Submission) -> String {
    let mut slug: String = submission
        .name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    slug.truncate(32);
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "anonymous" } else { slug };
    let id = submission.id.simple().to_string();
    format!("{position:03}-{slug}-{}.png", &id[..8])
}
