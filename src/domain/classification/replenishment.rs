//! Replenishment Calculator - Stock levels from class factors.

use serde::{Deserialize, Serialize};

use super::{AbcClass, AnalysisError, Configuration, ItemClassification, XyzClass};

/// Average number of weeks in a month (52.14 / 12).
pub const WEEKS_PER_MONTH: f64 = 4.345;

/// Recommended stock levels for one item, in whole units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentRecommendation {
    pub item_code: String,
    pub safety_stock_qty: u64,
    pub reorder_point_qty: u64,
    pub max_stock_qty: u64,
}

pub struct ReplenishmentCalculator;

impl ReplenishmentCalculator {
    /// Recommendation for a classified item.
    pub fn recommend(
        item: &ItemClassification,
        configuration: &Configuration,
    ) -> Result<ReplenishmentRecommendation, AnalysisError> {
        Self::compute(
            &item.item_code,
            item.abc_class,
            item.xyz_class,
            item.avg_monthly_qty,
            configuration,
        )
    }

    /// Computes stock levels.
    ///
    /// # Formula
    /// ```text
    /// lead_time_demand = avg_monthly_qty / 4.345 * lead_time_weeks
    /// safety_stock     = lead_time_demand * safety_factor(xyz)
    /// reorder_point    = lead_time_demand + safety_stock
    /// max_stock        = reorder_point * max_factor(abc)
    /// ```
    /// Each level is rounded to the nearest unit, halves away from zero.
    ///
    /// # Errors
    /// `InvalidConfiguration` when the average or any factor used is negative or non-finite.
    pub fn compute(
        item_code: &str,
        abc_class: AbcClass,
        xyz_class: XyzClass,
        avg_monthly_qty: f64,
        configuration: &Configuration,
    ) -> Result<ReplenishmentRecommendation, AnalysisError> {
        let safety_factor = configuration.safety_stock_factor(xyz_class);
        let max_factor = configuration.max_qty_factor(abc_class);

        for (field, value) in [
            ("avg_monthly_qty", avg_monthly_qty),
            ("lead_time_weeks", configuration.lead_time_weeks),
            ("safety_stock_factor", safety_factor),
            ("max_qty_factor", max_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalysisError::invalid_configuration(
                    field,
                    format!("must be finite and non-negative for item '{}', got {}", item_code, value),
                ));
            }
        }

        let weekly_avg = avg_monthly_qty / WEEKS_PER_MONTH;
        let lead_time_demand = weekly_avg * configuration.lead_time_weeks;
        let safety_stock = lead_time_demand * safety_factor;
        let reorder_point = lead_time_demand + safety_stock;
        let max_stock = reorder_point * max_factor;

        Ok(ReplenishmentRecommendation {
            item_code: item_code.to_string(),
            safety_stock_qty: whole_units(safety_stock),
            reorder_point_qty: whole_units(reorder_point),
            max_stock_qty: whole_units(max_stock),
        })
    }
}

fn whole_units(value: f64) -> u64 {
    value.round() as u64
}
