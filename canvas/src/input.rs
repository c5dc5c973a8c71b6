//! Input model: pointer events as the host delivers them and the gesture state.
//!
//! `PointerEvent` pairs a phase (down / move / up / leave) with the raw
//! [`PointerInput`] payload. Hosts translate `mousedown`, `touchstart` and
//! friends into these one-to-one; recorded scripts use the same serde shape.
//! `InputState` is the two-state machine the session advances.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::mapper::{ClientPoint, PointerInput};

/// Where in a gesture an event falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// `mousedown` / `touchstart`.
    Down,
    /// `mousemove` / `touchmove`.
    Move,
    /// `mouseup` / `touchend`.
    Up,
    /// `mouseleave`. Ends the stroke like `Up`.
    Leave,
}

/// A single pointer event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub input: PointerInput,
}

impl PointerEvent {
    #[must_use]
    pub fn new(phase: PointerPhase, input: PointerInput) -> Self {
        Self { phase, input }
    }

    #[must_use]
    pub fn mouse(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::new(phase, PointerInput::Mouse(ClientPoint::new(x, y)))
    }

    /// A touch event with a single active touch.
    #[must_use]
    pub fn touch(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::new(phase, PointerInput::Touch { touches: vec![ClientPoint::new(x, y)] })
    }

    /// `touchend`: the lifted finger is no longer in the active list.
    #[must_use]
    pub fn touch_end() -> Self {
        Self::new(PointerPhase::Up, PointerInput::Touch { touches: Vec::new() })
    }

    /// Touch-originated events must not scroll the page while drawing.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        matches!(self.input, PointerInput::Touch { .. })
    }
}

/// Gesture state of a drawing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No stroke open; moves are ignored.
    #[default]
    Idle,
    /// A pointer is down and extending the open stroke.
    Drawing,
}

impl InputState {
    #[must_use]
    pub fn is_drawing(self) -> bool {
        self == Self::Drawing
    }
}
