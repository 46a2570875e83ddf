//! Percentage value object (0-100 scale, full precision).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds a value to two decimals for display.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A share expressed on the 0-100 scale.
///
/// Stored at full `f64` precision; [`Percentage::rounded`] is for display only.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Computes `part / whole * 100`, or zero when `whole` is zero.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole == 0.0 {
            Self::ZERO
        } else {
            Self(part / whole * 100.0)
        }
    }

    /// Returns the full-precision value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to two decimals.
    pub fn rounded(&self) -> f64 {
        round_to_hundredths(self.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
