//! Serializable color representation and CSS-style hex parsing.

use peniko::Color;
use serde::{Deserialize, Serialize};

use crate::style::StyleError;

/// Serializable color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Default fill for active and half stars (`#ffd700`).
    pub const ACTIVE: Self = Self::opaque(255, 215, 0);
    /// Fill for inactive stars (`#cccccc`).
    pub const INACTIVE: Self = Self::opaque(204, 204, 204);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` color string.
    pub fn parse_hex(s: &str) -> Result<Self, StyleError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .filter(|d| d.len() == 6 || d.len() == 8)
            .ok_or_else(|| StyleError::BadColor(s.to_string()))?;
        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| StyleError::BadColor(s.to_string()))
        };
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Silent-fallback parse used by the widget itself: an unparseable
    /// string yields `fallback` rather than an error.
    pub fn parse_or(s: &str, fallback: Self) -> Self {
        Self::parse_hex(s).unwrap_or(fallback)
    }

    /// Format as a `#rrggbb` string (alpha omitted when opaque).
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::ACTIVE
    }
}

impl From<Color> for Rgba8 {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba8> for Color {
    fn from(color: Rgba8) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}
