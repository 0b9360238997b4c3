//! Style parameters: glyph size and the active-star color.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::color::Rgba8;

/// Errors from strict style-string parsing.
///
/// The widget itself never surfaces these; its own paths use the
/// parse-or-default variants. Hosts that validate form input before
/// applying it use the strict parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("invalid color string: {0:?}")]
    BadColor(String),
    #[error("invalid length string: {0:?}")]
    BadLength(String),
}

/// Glyph font size in logical pixels.
///
/// Parses CSS-style length strings (`"36px"` or a bare
/// number). Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StarSize(f64);

impl StarSize {
    pub const DEFAULT: Self = Self(36.0);

    /// Parse a `"{n}px"` length (a bare number is accepted too).
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let digits = s.trim().strip_suffix("px").unwrap_or(s).trim();
        match digits.parse::<f64>() {
            Ok(px) if px.is_finite() && px > 0.0 => Ok(Self(px)),
            _ => Err(StyleError::BadLength(s.to_string())),
        }
    }

    /// Silent-fallback parse: unparseable strings yield the default size.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// The size in pixels.
    pub fn px(self) -> f64 {
        self.0
    }
}

impl Default for StarSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for StarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}px", self.0 as i64)
        } else {
            write!(f, "{}px", self.0)
        }
    }
}

/// Visual style of the star row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StarStyle {
    /// Fill color for active and half stars.
    pub color: Rgba8,
    /// Glyph font size.
    pub size: StarSize,
}
