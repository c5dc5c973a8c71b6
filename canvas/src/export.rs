//! Raster export as a `data:image/png;base64,...` URI.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use protocol::DataUri;
use tiny_skia::Pixmap;

use crate::session::DrawingSession;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("png encoding failed: {0}")]
    Encode(String),
}

/// Anything that can hand over its current raster as an image data URI.
///
/// The submission flow only depends on this, so it can run against a real
/// session or a canned image.
pub trait RasterExporter {
    /// Synchronously encode the current raster.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the image cannot be encoded.
    fn export_raster(&self) -> Result<String, ExportError>;
}

/// Encode `raster` as PNG and wrap it in a data URI.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] when the PNG encoder fails.
pub fn encode_png_data_uri(raster: &Pixmap) -> Result<String, ExportError> {
    let bytes = raster.encode_png().map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(DataUri::png(bytes).to_string())
}

impl RasterExporter for DrawingSession {
    fn export_raster(&self) -> Result<String, ExportError> {
        encode_png_data_uri(self.pixmap())
    }
}
