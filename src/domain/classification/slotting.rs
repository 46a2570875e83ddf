//! Warehouse slotting hints for high-value items.

use serde::{Deserialize, Serialize};

use super::{AbcClass, XyzClass};

/// Where an A item should be stored, depending on demand stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlottingHint {
    PrimaryPickFaceGroundLevel,
    PrimaryPickFaceMiddleLevel,
    PrimaryPickFaceWithBufferStock,
}

impl SlottingHint {
    /// Hint for a class pair; only A items get one.
    pub fn for_classes(abc_class: AbcClass, xyz_class: XyzClass) -> Option<Self> {
        match (abc_class, xyz_class) {
            (AbcClass::A, XyzClass::X) => Some(SlottingHint::PrimaryPickFaceGroundLevel),
            (AbcClass::A, XyzClass::Y) => Some(SlottingHint::PrimaryPickFaceMiddleLevel),
            (AbcClass::A, XyzClass::Z) => Some(SlottingHint::PrimaryPickFaceWithBufferStock),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SlottingHint::PrimaryPickFaceGroundLevel => "Primary pick face, ground level",
            SlottingHint::PrimaryPickFaceMiddleLevel => "Primary pick face, middle level",
            SlottingHint::PrimaryPickFaceWithBufferStock => "Primary pick face with buffer stock",
        }
    }
}
