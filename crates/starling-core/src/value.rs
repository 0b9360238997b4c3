//! Rating values and half-star arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of a star glyph an input position landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalfSide {
    Left,
    Right,
}

/// The visual class of a single star glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarFill {
    /// Not counted toward the rating.
    Empty,
    /// Counts 0.5 toward the rating; rendered half-filled.
    Half,
    /// Fully counted toward the rating.
    Full,
}

/// A rating value: always a non-negative multiple of 0.5.
///
/// The granularity invariant holds by construction: every constructor
/// rounds via `round(raw * 2) / 2`. A `Rating` is deliberately NOT bounded
/// by any star count; `update_properties` may leave the committed value
/// above the current maximum, and rendering clamps only visually through
/// the star loop bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// The zero rating.
    pub const ZERO: Self = Self(0.0);

    /// Round a raw value to the nearest multiple of 0.5, floored at zero.
    pub fn new(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::ZERO;
        }
        Self(((raw * 2.0).round() / 2.0).max(0.0))
    }

    /// Map a star hit to a value: the left half of star `index` is
    /// `index - 0.5`, the right half is `index` (1-based indices).
    pub fn from_star(index: u32, side: HalfSide) -> Self {
        let rounded = f64::from(index);
        match side {
            HalfSide::Left => Self((rounded - 0.5).max(0.0)),
            HalfSide::Right => Self(rounded),
        }
    }

    /// The value as a float.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of fully active stars.
    pub fn full_stars(self) -> u32 {
        self.0.floor() as u32
    }

    /// Whether the value carries a 0.5 fractional part.
    pub fn has_half(self) -> bool {
        // Multiples of 0.5 are exact in f64, so this comparison is safe.
        self.0.fract() == 0.5
    }
}

impl From<f64> for Rating {
    fn from(raw: f64) -> Self {
        Self::new(raw)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl fmt::Display for Rating {
    /// Integral values print without a trailing `.0` (`"4"`, `"3.5"`),
    /// so the label reads `"Rating: 4/5"` rather than `"Rating: 4.0/5"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_half() {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0 as i64)
        }
    }
}

/// Compute the fill class of each glyph for a value, left to right.
///
/// Star `i` (1-based) is `Full` iff `i <= value`, `Half` iff
/// `i - 0.5 == value`, otherwise `Empty`. Pure and idempotent: the same
/// `(value, max_value)` always yields the same row.
pub fn star_fills(value: Rating, max_value: u32) -> Vec<StarFill> {
    (1..=max_value)
        .map(|i| {
            let star = f64::from(i);
            if star <= value.get() {
                StarFill::Full
            } else if star - 0.5 == value.get() {
                StarFill::Half
            } else {
                StarFill::Empty
            }
        })
        .collect()
}

/// Format the text label shown under the row.
pub fn label(value: Rating, max_value: u32) -> String {
    format!("Rating: {value}/{max_value}")
}
