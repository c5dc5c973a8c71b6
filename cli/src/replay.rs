//! Pointer scripts: recorded input replayed into a drawing surface.
//!
//! A script is a JSON array. Each step is either a pointer event in the
//! canvas wire shape (`{"phase":"down","input":{"kind":"mouse","x":1,"y":2}}`)
//! or a control step: `{"color":"#FF0000"}` picks a color, `{"clear":true}`
//! presses Clear.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use canvas::color::ColorParseError;
use canvas::{Action, PointerEvent, Surface};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Pointer(PointerEvent),
    Color { color: String },
    Clear { clear: bool },
}

/// What a replay did, for the summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub strokes: usize,
    pub segments: usize,
    pub clears: usize,
}

/// Parse a script document.
///
/// # Errors
///
/// Returns the JSON error for malformed scripts or unknown step shapes.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Feed every step to `surface` in order.
///
/// # Errors
///
/// Stops at the first color step that does not parse.
pub fn replay(surface: &mut Surface, steps: &[ScriptStep]) -> Result<ReplaySummary, ColorParseError> {
    let mut summary = ReplaySummary::default();
    for step in steps {
        match step {
            ScriptStep::Pointer(event) => {
                for action in surface.handle(event) {
                    if let Action::StrokeClosed { segments } = action {
                        summary.strokes += 1;
                        summary.segments += segments;
                    }
                }
            }
            ScriptStep::Color { color } => {
                if let Some(session) = surface.session_mut() {
                    session.set_color_hex(color)?;
                }
            }
            ScriptStep::Clear { clear: true } => {
                if surface.reset().is_some() {
                    summary.clears += 1;
                }
            }
            ScriptStep::Clear { clear: false } => {}
        }
    }
    Ok(summary)
}
