//! Analysis result entities and read-side projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AbcClass, MatrixCell, ReplenishmentRecommendation, SlottingHint, XyzClass};
use crate::domain::foundation::{ConfigId, Percentage, Period, ResultId, Timestamp};

/// ABC and XYZ outcome for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemClassification {
    pub item_code: String,
    pub item_name: Option<String>,
    pub warehouse_zone: Option<String>,
    pub total_turnover: f64,
    pub total_quantity: f64,
    pub percentage_of_turnover: Percentage,
    pub cumulative_percentage: Percentage,
    pub rank: u32,
    pub abc_class: AbcClass,
    pub coefficient_of_variation: f64,
    pub xyz_class: XyzClass,
    pub avg_monthly_qty: f64,
    pub min_qty_monthly: f64,
    pub max_qty_monthly: f64,
}

/// Turnover and quantity of an item in one observed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFigure {
    pub period: Period,
    pub turnover: f64,
    pub quantity: f64,
}

/// Per-item row of an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(flatten)]
    pub classification: ItemClassification,
    pub recommendation: ReplenishmentRecommendation,
    pub monthly: Vec<MonthlyFigure>,
    pub slotting_hint: Option<SlottingHint>,
}

/// Roll-up of one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDistribution<C> {
    pub class: C,
    pub item_count: usize,
    pub percentage_of_items: Percentage,
    pub turnover_sum: f64,
    pub percentage_of_turnover: Percentage,
    pub quantity_sum: f64,
    pub percentage_of_quantity: Percentage,
}

/// Complete outcome of one analysis run.
///
/// `details` is in ABC rank order; `matrix` always holds nine cells in
/// AX, AY, AZ, BX, ..., CZ order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub result_id: ResultId,
    pub analysis_name: String,
    pub analysis_date: Timestamp,
    pub config_id: ConfigId,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_by: Option<String>,
    pub total_items: usize,
    pub a_items: usize,
    pub b_items: usize,
    pub c_items: usize,
    pub x_items: usize,
    pub y_items: usize,
    pub z_items: usize,
    pub details: Vec<ItemDetail>,
    pub matrix: Vec<MatrixCell>,
    pub abc_distribution: Vec<ClassDistribution<AbcClass>>,
    pub xyz_distribution: Vec<ClassDistribution<XyzClass>>,
}

impl AnalysisResult {
    /// Lightweight overview of this result.
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            result_id: self.result_id,
            analysis_name: self.analysis_name.clone(),
            analysis_date: self.analysis_date,
            config_id: self.config_id,
            total_items: self.total_items,
            abc_distribution: BTreeMap::from([
                (AbcClass::A, self.a_items),
                (AbcClass::B, self.b_items),
                (AbcClass::C, self.c_items),
            ]),
            xyz_distribution: BTreeMap::from([
                (XyzClass::X, self.x_items),
                (XyzClass::Y, self.y_items),
                (XyzClass::Z, self.z_items),
            ]),
        }
    }

    /// The first `limit` items by rank with their monthly series.
    pub fn top_items(&self, limit: usize) -> Vec<TopItem> {
        self.details
            .iter()
            .take(limit)
            .map(|d| TopItem {
                rank: d.classification.rank,
                item_code: d.classification.item_code.clone(),
                item_name: d.classification.item_name.clone(),
                abc_class: d.classification.abc_class,
                xyz_class: d.classification.xyz_class,
                total_turnover: d.classification.total_turnover,
                monthly: d.monthly.clone(),
            })
            .collect()
    }

    /// Cell of the matrix for a class pair.
    pub fn cell(&self, abc_class: AbcClass, xyz_class: XyzClass) -> Option<&MatrixCell> {
        self.matrix
            .iter()
            .find(|c| c.abc_class == abc_class && c.xyz_class == xyz_class)
    }

    /// Detail row of an item.
    pub fn detail(&self, item_code: &str) -> Option<&ItemDetail> {
        self.details
            .iter()
            .find(|d| d.classification.item_code == item_code)
    }
}

/// Class counts of a stored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub result_id: ResultId,
    pub analysis_name: String,
    pub analysis_date: Timestamp,
    pub config_id: ConfigId,
    pub total_items: usize,
    pub abc_distribution: BTreeMap<AbcClass, usize>,
    pub xyz_distribution: BTreeMap<XyzClass, usize>,
}

/// High-value item with its monthly history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub rank: u32,
    pub item_code: String,
    pub item_name: Option<String>,
    pub abc_class: AbcClass,
    pub xyz_class: XyzClass,
    pub total_turnover: f64,
    pub monthly: Vec<MonthlyFigure>,
}
