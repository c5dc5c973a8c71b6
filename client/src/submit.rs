//! Submission client: validates a candidate RSVP and talks to the API.
//!
//! DESIGN
//! ======
//! Validation runs before anything touches the network: a blank name, a
//! missing drawing surface or an oversize drawing never produce a request.
//! One submission may be in flight at a time; the guard is released when the
//! submit future completes or is dropped.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::sync::atomic::{AtomicBool, Ordering};

use canvas::RasterExporter;
use protocol::{NewSubmission, Submission};
use tracing::{debug, info};

use crate::api::RsvpApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ValidationError};

pub struct SubmissionClient<A> {
    api: A,
    max_drawing_bytes: usize,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on drop.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<A: RsvpApi> SubmissionClient<A> {
    #[must_use]
    pub fn new(api: A, config: &ClientConfig) -> Self {
        Self { api, max_drawing_bytes: config.max_drawing_bytes, in_flight: AtomicBool::new(false) }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Build the create payload, or say why it cannot be sent.
    ///
    /// The name is sent exactly as typed; only the emptiness check trims.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] for a blank name, no surface or an oversize
    /// drawing; [`ClientError::Export`] if the raster cannot be encoded.
    pub fn validate(&self, name: &str, exporter: Option<&dyn RasterExporter>) -> Result<NewSubmission, ClientError> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingName.into());
        }
        let exporter = exporter.ok_or(ValidationError::MissingSurface)?;
        let drawing = exporter.export_raster()?;
        if drawing.len() > self.max_drawing_bytes {
            return Err(ValidationError::DrawingTooLarge { size: drawing.len(), max: self.max_drawing_bytes }.into());
        }
        Ok(NewSubmission { name: name.to_owned(), drawing })
    }

    /// Validate and send one submission.
    ///
    /// # Errors
    ///
    /// [`ClientError::SubmissionInFlight`] while another submit is pending,
    /// validation/export errors from [`Self::validate`], and
    /// [`ClientError::Submission`] when the create call fails.
    pub async fn submit(&self, name: &str, exporter: Option<&dyn RasterExporter>) -> Result<Submission, ClientError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("submit ignored: previous submission still in flight");
            return Err(ClientError::SubmissionInFlight);
        };
        let new = self.validate(name, exporter)?;
        let drawing_bytes = new.drawing.len();

        let created = self.api.create(&new).await.map_err(ClientError::Submission)?;
        info!(id = %created.id, drawing_bytes, "rsvp submitted");
        Ok(created)
    }

    /// Fetch the full gallery list, newest first.
    ///
    /// # Errors
    ///
    /// [`ClientError::Fetch`] when the list call fails.
    pub async fn fetch_all(&self) -> Result<Vec<Submission>, ClientError> {
        let items = self.api.list().await.map_err(ClientError::Fetch)?;
        debug!(count = items.len(), "gallery fetched");
        Ok(items)
    }
}
