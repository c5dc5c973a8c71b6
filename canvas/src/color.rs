//! Stroke colors and the fixed swatch palette.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

/// Error returned when a color string is not `#RGB` or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color `{0}`: expected #RGB or #RRGGBB")]
pub struct ColorParseError(pub String);

/// An opaque-or-translucent 8-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Parse `#RRGGBB` or the short `#RGB` form. The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] for any other shape or a non-hex digit.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(input.to_owned());
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let expand = |i: usize| channel(&hex[i..=i]).map(|v| v * 0x11);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(err()),
        }
    }

    /// Uppercase `#RRGGBB`; alpha is not represented.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Swatches offered next to the drawing surface, in display order.
pub const PALETTE: [Rgba; 7] = [
    Rgba::rgb(0x00, 0x00, 0x00),
    Rgba::rgb(0xFF, 0x00, 0x00),
    Rgba::rgb(0x00, 0x00, 0xFF),
    Rgba::rgb(0xFF, 0x00, 0xFF),
    Rgba::rgb(0xFF, 0xA5, 0x00),
    Rgba::rgb(0x80, 0x00, 0x80),
    Rgba::rgb(0x00, 0x80, 0x00),
];
