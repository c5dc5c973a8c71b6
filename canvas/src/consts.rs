//! Shared numeric constants for the canvas crate.

use crate::color::Rgba;

// ── Stroke ──────────────────────────────────────────────────────

/// Ink line width in backing pixels.
pub const LINE_WIDTH_PX: f32 = 3.0;

/// Stroke color a fresh session starts with.
pub const DEFAULT_STROKE: Rgba = Rgba::BLACK;

// ── Surface ─────────────────────────────────────────────────────

/// Solid fill used on mount and on every clear.
pub const BACKGROUND: Rgba = Rgba::WHITE;
