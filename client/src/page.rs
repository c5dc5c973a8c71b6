//! RSVP page state: name field, drawing surface, gallery and notices.
//!
//! DESIGN
//! ======
//! One owner drives the page through `&mut self`. Pointer handling, color
//! changes and clearing are synchronous; `submit` and `load_gallery` are the
//! only suspension points. After a create succeeds the gallery is re-fetched
//! and only then is the form cleared.
//!
//! ERROR HANDLING
//! ==============
//! Failures never clear the name or the drawing. Each error sets a
//! user-facing notice and is logged with its detail. A gallery refresh that
//! fails after a successful create is logged only; the create still counts.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use canvas::color::ColorParseError;
use canvas::{Action, ElementRect, PointerEvent, RasterExporter, Rgba, Surface, SurfaceError};
use protocol::Submission;
use tracing::{info, warn};

use crate::api::RsvpApi;
use crate::error::ClientError;
use crate::gallery::GalleryState;
use crate::submit::SubmissionClient;

pub struct RsvpPage<A> {
    name: String,
    surface: Surface,
    gallery: GalleryState,
    client: SubmissionClient<A>,
    notice: Option<&'static str>,
}

impl<A: RsvpApi> RsvpPage<A> {
    /// A page with an empty form and no mounted canvas.
    #[must_use]
    pub fn new(client: SubmissionClient<A>) -> Self {
        Self { name: String::new(), surface: Surface::new(), gallery: GalleryState::new(), client, notice: None }
    }

    // --- Form ---

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Pending user-facing message, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn client(&self) -> &SubmissionClient<A> {
        &self.client
    }

    // --- Canvas ---

    /// Mount the drawing canvas at its measured on-screen box.
    ///
    /// # Errors
    ///
    /// Propagates [`SurfaceError`]; the page is left without a surface.
    pub fn mount_canvas(&mut self, rect: ElementRect) -> Result<(), SurfaceError> {
        self.surface.mount(rect)
    }

    pub fn unmount_canvas(&mut self) {
        self.surface.unmount();
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Vec<Action> {
        self.surface.handle(event)
    }

    /// Pick a swatch. Ignored without a mounted canvas.
    pub fn select_color(&mut self, color: Rgba) {
        if let Some(session) = self.surface.session_mut() {
            session.set_color(color);
        }
    }

    /// Apply a color typed as hex. Without a mounted canvas the input is
    /// only checked; there is no session to recolor.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] and keeps the current color when `hex` is
    /// not a color.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        match self.surface.session_mut() {
            Some(session) => session.set_color_hex(hex),
            None => Rgba::from_hex(hex).map(|_| ()),
        }
    }

    /// The Clear button.
    pub fn clear_drawing(&mut self) -> Option<Action> {
        self.surface.reset()
    }

    // --- Network ---

    /// Replace the gallery with the server's list.
    ///
    /// # Errors
    ///
    /// [`ClientError::Fetch`]; the gallery keeps its current items.
    pub async fn load_gallery(&mut self) -> Result<(), ClientError> {
        self.gallery.begin_fetch();
        match self.client.fetch_all().await {
            Ok(items) => {
                self.gallery.replace_all(items);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "error fetching rsvps");
                self.gallery.fetch_failed(e.notice());
                Err(e)
            }
        }
    }

    /// Submit the form, refresh the gallery, then clear the form.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] from validation or the create call. The name and
    /// drawing are untouched and a notice is set.
    pub async fn submit(&mut self) -> Result<Submission, ClientError> {
        let exporter = self.surface.session().map(|s| s as &dyn RasterExporter);
        let created = match self.client.submit(&self.name, exporter).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "error submitting rsvp");
                self.notice = Some(e.notice());
                return Err(e);
            }
        };

        if let Err(e) = self.load_gallery().await {
            warn!(error = %e, id = %created.id, "gallery refresh after submit failed");
        }

        self.name.clear();
        self.surface.reset();
        self.notice = None;
        info!(id = %created.id, "rsvp form cleared");
        Ok(created)
    }
}
