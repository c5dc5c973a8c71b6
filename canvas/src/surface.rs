//! Host-side wrapper owning the optional session of one canvas element.
//!
//! The element can be absent (not yet mounted, or unmounted). `Surface`
//! keeps that as `Option<DrawingSession>` so hosts forward every DOM event
//! without first checking mount state.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::input::PointerEvent;
use crate::mapper::ElementRect;
use crate::session::{Action, DrawingSession, SurfaceError};

#[derive(Debug, Clone, Default)]
pub struct Surface {
    session: Option<DrawingSession>,
}

impl Surface {
    /// An unmounted surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh session for the element, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Propagates [`SurfaceError`] from [`DrawingSession::mount`]; the
    /// surface is left unmounted.
    pub fn mount(&mut self, rect: ElementRect) -> Result<(), SurfaceError> {
        self.session = None;
        self.session = Some(DrawingSession::mount(rect)?);
        Ok(())
    }

    /// Drop the session. Returns whether one existed.
    pub fn unmount(&mut self) -> bool {
        self.session.take().is_some()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut DrawingSession> {
        self.session.as_mut()
    }

    /// Forward an event to the session. Without one, touch events still ask
    /// the host to suppress scrolling and nothing else happens.
    pub fn handle(&mut self, event: &PointerEvent) -> Vec<Action> {
        match self.session.as_mut() {
            Some(session) => session.handle(event),
            None if event.is_touch() => vec![Action::SuppressDefault],
            None => Vec::new(),
        }
    }

    /// Clear the raster if mounted.
    pub fn reset(&mut self) -> Option<Action> {
        self.session.as_mut().map(DrawingSession::reset)
    }
}
