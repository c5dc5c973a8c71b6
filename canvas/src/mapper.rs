//! Coordinate mapping from viewport (CSS) pixels to backing-raster pixels.
//!
//! The host reports where the canvas element sits on screen
//! ([`ElementRect`], what `getBoundingClientRect` returns) and the raster
//! has its own fixed [`BackingSize`]. The two differ whenever CSS scales the
//! element after mount, so every pointer position is rescaled per axis.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use serde::{Deserialize, Serialize};

/// A point in backing-raster pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of the canvas element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Whether the box can be used as a scale divisor.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Resolution of the backing raster, fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

/// A viewport position as reported by the host (`clientX` / `clientY`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Raw pointer payload, still shaped like the DOM event it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerInput {
    /// Mouse or pen pointer: a single coordinate pair.
    Mouse(ClientPoint),
    /// Touch: the list of currently active touches. Only the first is used.
    Touch { touches: Vec<ClientPoint> },
}

impl PointerInput {
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        match self {
            Self::Mouse(_) => PointerKind::Mouse,
            Self::Touch { .. } => PointerKind::Touch,
        }
    }
}

/// Which device family produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A pointer position already mapped into raster pixels.
///
/// Built once by [`map_input`]; everything downstream ignores the DOM shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub kind: PointerKind,
    pub point: Point,
}

/// The mounted element as the mapper sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    pub rect: ElementRect,
    pub backing: BackingSize,
}

impl ElementMetrics {
    /// Map a viewport position into raster pixels.
    ///
    /// Returns the origin when the rect cannot be measured.
    #[must_use]
    pub fn to_raster(&self, client: ClientPoint) -> Point {
        if !self.rect.is_measurable() {
            return Point::ORIGIN;
        }
        let scale_x = f64::from(self.backing.width) / self.rect.width;
        let scale_y = f64::from(self.backing.height) / self.rect.height;
        Point {
            x: (client.x - self.rect.left) * scale_x,
            y: (client.y - self.rect.top) * scale_y,
        }
    }
}

/// Convert raw pointer input into a raster-space sample.
///
/// An unmounted element (`None`), an unmeasurable rect, or a touch event with
/// no active touches all map to the origin instead of failing.
#[must_use]
pub fn map_input(input: &PointerInput, element: Option<&ElementMetrics>) -> PointerSample {
    let client = match input {
        PointerInput::Mouse(p) => Some(*p),
        PointerInput::Touch { touches } => touches.first().copied(),
    };
    let point = match (element, client) {
        (Some(metrics), Some(client)) => metrics.to_raster(client),
        _ => Point::ORIGIN,
    };
    PointerSample { kind: input.kind(), point }
}
