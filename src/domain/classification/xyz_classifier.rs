//! XYZ Classifier - Demand variability from per-period quantities.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::XyzClass;

/// Variability statistics for one item over its observed periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandVariability {
    pub item_code: String,
    pub avg_monthly_qty: f64,
    pub std_dev_qty: f64,
    pub min_qty_monthly: f64,
    pub max_qty_monthly: f64,
    pub coefficient_of_variation: f64,
    pub xyz_class: XyzClass,
    pub observed_periods: usize,
}

/// Assigns X/Y/Z tiers by coefficient of variation.
pub struct XyzClassifier;

impl XyzClassifier {
    /// Classifies a single item.
    ///
    /// Uses the population standard deviation (divide by N). A zero mean
    /// yields `cv = 0` and class `X`, as does a single observed period.
    pub fn classify_item(
        item_code: &str,
        quantities: &[f64],
        x_threshold: f64,
        y_threshold: f64,
    ) -> DemandVariability {
        let n = quantities.len();
        if n == 0 {
            return DemandVariability {
                item_code: item_code.to_string(),
                avg_monthly_qty: 0.0,
                std_dev_qty: 0.0,
                min_qty_monthly: 0.0,
                max_qty_monthly: 0.0,
                coefficient_of_variation: 0.0,
                xyz_class: XyzClass::X,
                observed_periods: 0,
            };
        }

        let mean = quantities.iter().sum::<f64>() / n as f64;
        let variance = quantities.iter().map(|q| (q - mean).powi(2)).sum::<f64>() / n as f64;
        let std_dev = variance.sqrt();

        let coefficient_of_variation = if mean > 0.0 {
            std_dev / mean * 100.0
        } else {
            0.0
        };

        let min = quantities.iter().copied().fold(f64::INFINITY, f64::min);
        let max = quantities.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        DemandVariability {
            item_code: item_code.to_string(),
            avg_monthly_qty: mean,
            std_dev_qty: std_dev,
            min_qty_monthly: min,
            max_qty_monthly: max,
            coefficient_of_variation,
            xyz_class: XyzClass::from_variation(coefficient_of_variation, x_threshold, y_threshold),
            observed_periods: n,
        }
    }

    /// Classifies every item in parallel, preserving input order.
    pub fn classify(
        series: &[(&str, Vec<f64>)],
        x_threshold: f64,
        y_threshold: f64,
    ) -> Vec<DemandVariability> {
        series
            .par_iter()
            .map(|(code, quantities)| Self::classify_item(code, quantities, x_threshold, y_threshold))
            .collect()
    }
}
