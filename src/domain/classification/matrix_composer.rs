//! Matrix Composer - ABC x XYZ cross tabulation.

use serde::{Deserialize, Serialize};

use super::{AbcClass, ItemClassification, XyzClass};
use crate::domain::foundation::Percentage;

/// One cell of the 3x3 classification matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub abc_class: AbcClass,
    pub xyz_class: XyzClass,
    pub item_count: usize,
    pub turnover_sum: f64,
    pub quantity_sum: f64,
    pub percentage_of_items: Percentage,
}

impl MatrixCell {
    fn empty(abc_class: AbcClass, xyz_class: XyzClass) -> Self {
        Self {
            abc_class,
            xyz_class,
            item_count: 0,
            turnover_sum: 0.0,
            quantity_sum: 0.0,
            percentage_of_items: Percentage::ZERO,
        }
    }

    /// Two-letter label such as `AX`.
    pub fn label(&self) -> String {
        format!("{}{}", self.abc_class, self.xyz_class)
    }
}

pub struct MatrixComposer;

impl MatrixComposer {
    /// Builds all nine cells in AX, AY, AZ, BX, ..., CZ order.
    ///
    /// Cells without items are present with zero values.
    pub fn compose(classifications: &[ItemClassification]) -> Vec<MatrixCell> {
        let mut cells: Vec<MatrixCell> = AbcClass::ALL
            .iter()
            .flat_map(|abc| XyzClass::ALL.iter().map(move |xyz| MatrixCell::empty(*abc, *xyz)))
            .collect();

        for item in classifications {
            let cell = &mut cells[Self::index(item.abc_class, item.xyz_class)];
            cell.item_count += 1;
            cell.turnover_sum += item.total_turnover;
            cell.quantity_sum += item.total_quantity;
        }

        let total_items = classifications.len() as f64;
        for cell in &mut cells {
            cell.percentage_of_items = Percentage::of(cell.item_count as f64, total_items);
        }

        cells
    }

    fn index(abc_class: AbcClass, xyz_class: XyzClass) -> usize {
        let row = match abc_class {
            AbcClass::A => 0,
            AbcClass::B => 1,
            AbcClass::C => 2,
        };
        let col = match xyz_class {
            XyzClass::X => 0,
            XyzClass::Y => 1,
            XyzClass::Z => 2,
        };
        row * 3 + col
    }
}
