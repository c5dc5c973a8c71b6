//! Stroke renderer: turns mapped points into ink on a raster.
//!
//! The renderer owns only path state (the anchor of the open stroke) and the
//! active style. Pixels live in the caller's [`Pixmap`]; each extension
//! strokes one segment immediately, so nothing about a stroke is retained
//! once it has been drawn.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Rgba;
use crate::consts::{DEFAULT_STROKE, LINE_WIDTH_PX};
use crate::mapper::Point;

/// The stroke currently being extended.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenPath {
    /// Last committed point; the next segment starts here.
    cursor: Point,
    /// Segments drawn since `begin`.
    segments: usize,
}

/// Open/closed path state plus the style applied to new segments.
#[derive(Debug, Clone)]
pub struct StrokeRenderer {
    color: Rgba,
    width: f32,
    open: Option<OpenPath>,
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        Self { color: DEFAULT_STROKE, width: LINE_WIDTH_PX, open: None }
    }
}

impl StrokeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Applies to segments drawn after this call only.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    #[must_use]
    pub fn line_width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Anchor of the open stroke, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.open.map(|p| p.cursor)
    }

    /// Open a new path at `point`. Draws nothing; a previously open path is
    /// abandoned.
    pub fn begin(&mut self, point: Point) {
        self.open = Some(OpenPath { cursor: point, segments: 0 });
    }

    /// Draw a segment from the cursor to `point` and advance the cursor.
    ///
    /// Returns `false` without touching the raster when no stroke is open.
    pub fn extend(&mut self, raster: &mut Pixmap, point: Point) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        draw_segment(raster, open.cursor, point, self.color, self.width);
        open.cursor = point;
        open.segments += 1;
        true
    }

    /// Close the open path, returning how many segments it held.
    pub fn end(&mut self) -> Option<usize> {
        self.open.take().map(|p| p.segments)
    }
}

fn ink(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

#[allow(clippy::cast_possible_truncation)]
fn draw_segment(raster: &mut Pixmap, from: Point, to: Point, color: Rgba, width: f32) {
    let paint = ink(color);
    let (x0, y0, x1, y1) = (from.x as f32, from.y as f32, to.x as f32, to.y as f32);

    // A round-capped zero-length line renders as a dot.
    if (x0 - x1).abs() < f32::EPSILON && (y0 - y1).abs() < f32::EPSILON {
        if let Some(dot) = PathBuilder::from_circle(x0, y0, width / 2.0) {
            raster.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y1);
    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        raster.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
