//! Drawing session: the surface controller a mounted canvas element owns.
//!
//! DESIGN
//! ======
//! A `DrawingSession` exists only while an element is mounted. It holds the
//! raster, the element metrics used by the mapper, the stroke renderer and the
//! gesture state. Hosts feed it [`PointerEvent`]s and act on the returned
//! [`Action`]s; nothing here touches the host directly.
//!
//! The backing resolution is measured once at mount (1 raster px per CSS px)
//! and never re-measured. [`DrawingSession::relayout`] only updates the rect
//! the mapper divides by, so a CSS-resized element keeps drawing under the
//! pointer at the original resolution.
//!
//! ERROR HANDLING
//! ==============
//! Mounting can fail when the element has no usable size. Once mounted, every
//! handler is infallible: events that do not apply to the current state are
//! ignored.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tiny_skia::Pixmap;

use crate::color::{ColorParseError, Rgba};
use crate::consts::BACKGROUND;
use crate::input::{InputState, PointerEvent, PointerPhase};
use crate::mapper::{BackingSize, ElementMetrics, ElementRect, PointerInput, map_input};
use crate::stroke::StrokeRenderer;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Cancel the browser default (touch scrolling) for this event.
    SuppressDefault,
    /// Raster pixels changed; repaint.
    RenderNeeded,
    /// A stroke closed after drawing `segments` segments.
    StrokeClosed { segments: usize },
}

/// Failure to create a raster for an element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    #[error("element size {width}x{height} has no whole pixels")]
    EmptyElement { width: f64, height: f64 },
    #[error("cannot allocate a {width}x{height} raster")]
    Allocation { width: u32, height: u32 },
}

/// An active drawing surface bound to one mounted element.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    raster: Pixmap,
    metrics: ElementMetrics,
    renderer: StrokeRenderer,
    input: InputState,
}

impl DrawingSession {
    /// Measure the element once, allocate a matching raster and paint the
    /// background.
    ///
    /// # Errors
    ///
    /// [`SurfaceError::EmptyElement`] when either side truncates to zero
    /// pixels (or is not finite); [`SurfaceError::Allocation`] when the
    /// raster is too large to allocate.
    pub fn mount(rect: ElementRect) -> Result<Self, SurfaceError> {
        let backing = backing_for(rect)?;
        let mut raster = Pixmap::new(backing.width, backing.height)
            .ok_or(SurfaceError::Allocation { width: backing.width, height: backing.height })?;
        raster.fill(BACKGROUND.to_skia());
        Ok(Self {
            raster,
            metrics: ElementMetrics { rect, backing },
            renderer: StrokeRenderer::new(),
            input: InputState::Idle,
        })
    }

    // --- Layout ---

    /// Record a new on-screen box for the element. The raster is unchanged.
    pub fn relayout(&mut self, rect: ElementRect) {
        self.metrics.rect = rect;
    }

    #[must_use]
    pub fn metrics(&self) -> ElementMetrics {
        self.metrics
    }

    #[must_use]
    pub fn backing_size(&self) -> BackingSize {
        self.metrics.backing
    }

    // --- Input events ---

    /// Dispatch a host event to the matching phase handler.
    pub fn handle(&mut self, event: &PointerEvent) -> Vec<Action> {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(&event.input),
            PointerPhase::Move => self.on_pointer_move(&event.input),
            PointerPhase::Up | PointerPhase::Leave => self.on_pointer_up(&event.input),
        }
    }

    /// Idle -> Drawing: open a stroke at the mapped point.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> Vec<Action> {
        let mut actions = suppress_for(input);
        let sample = map_input(input, Some(&self.metrics));
        if let Some(segments) = self.renderer.end() {
            actions.push(Action::StrokeClosed { segments });
        }
        self.renderer.begin(sample.point);
        self.input = InputState::Drawing;
        actions
    }

    /// Drawing -> Drawing: extend the open stroke. Ignored while idle.
    pub fn on_pointer_move(&mut self, input: &PointerInput) -> Vec<Action> {
        let mut actions = suppress_for(input);
        if !self.input.is_drawing() {
            return actions;
        }
        let sample = map_input(input, Some(&self.metrics));
        if self.renderer.extend(&mut self.raster, sample.point) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Drawing -> Idle on up, leave or touch end.
    pub fn on_pointer_up(&mut self, input: &PointerInput) -> Vec<Action> {
        let mut actions = suppress_for(input);
        if let Some(segments) = self.renderer.end() {
            actions.push(Action::StrokeClosed { segments });
        }
        self.input = InputState::Idle;
        actions
    }

    // --- Surface operations ---

    /// Repaint the whole raster with the background.
    ///
    /// Gesture state and color are kept, so a stroke open at the time of the
    /// call keeps extending on the cleared surface.
    pub fn reset(&mut self) -> Action {
        self.raster.fill(BACKGROUND.to_skia());
        Action::RenderNeeded
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.renderer.set_color(color);
    }

    /// Parse and apply a hex color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] and keeps the current color when `hex` is
    /// not a valid color.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<(), ColorParseError> {
        let color = Rgba::from_hex(hex)?;
        self.renderer.set_color(color);
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn color(&self) -> Rgba {
        self.renderer.color()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    /// The raster, for painting or export.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.raster
    }
}

fn suppress_for(input: &PointerInput) -> Vec<Action> {
    match input {
        PointerInput::Touch { .. } => vec![Action::SuppressDefault],
        PointerInput::Mouse(_) => Vec::new(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_for(rect: ElementRect) -> Result<BackingSize, SurfaceError> {
    let (w, h) = (rect.width.trunc(), rect.height.trunc());
    let usable = |v: f64| v.is_finite() && v >= 1.0 && v <= f64::from(u32::MAX);
    if !usable(w) || !usable(h) {
        return Err(SurfaceError::EmptyElement { width: rect.width, height: rect.height });
    }
    Ok(BackingSize { width: w as u32, height: h as u32 })
}
