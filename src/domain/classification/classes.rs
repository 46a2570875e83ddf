//! Value and variability tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pareto value tier, A being the highest cumulative turnover share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    /// All classes in display order.
    pub const ALL: [AbcClass; 3] = [AbcClass::A, AbcClass::B, AbcClass::C];

    /// Classifies a cumulative turnover percentage.
    ///
    /// Boundaries are inclusive on the better class: landing exactly on
    /// `a_threshold` yields `A`.
    pub fn from_cumulative(cumulative_percentage: f64, a_threshold: f64, b_threshold: f64) -> Self {
        if cumulative_percentage <= a_threshold {
            AbcClass::A
        } else if cumulative_percentage <= b_threshold {
            AbcClass::B
        } else {
            AbcClass::C
        }
    }

    /// Returns the display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }
}

impl fmt::Display for AbcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demand variability tier: X stable, Y moderate, Z erratic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum XyzClass {
    X,
    Y,
    Z,
}

impl XyzClass {
    /// All classes in display order.
    pub const ALL: [XyzClass; 3] = [XyzClass::X, XyzClass::Y, XyzClass::Z];

    /// Classifies a coefficient of variation (in percent).
    pub fn from_variation(coefficient_of_variation: f64, x_threshold: f64, y_threshold: f64) -> Self {
        if coefficient_of_variation <= x_threshold {
            XyzClass::X
        } else if coefficient_of_variation <= y_threshold {
            XyzClass::Y
        } else {
            XyzClass::Z
        }
    }

    /// Returns the display label for this class.
    pub fn label(&self) -> &'static str {
        match self {
            XyzClass::X => "X",
            XyzClass::Y => "Y",
            XyzClass::Z => "Z",
        }
    }
}

impl fmt::Display for XyzClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
