//! ABC Classifier - Pareto ranking of items by turnover.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::AbcClass;
use crate::domain::foundation::Percentage;

/// Total turnover of one item, the classifier's input.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTurnover {
    pub item_code: String,
    pub total_turnover: f64,
}

impl ItemTurnover {
    pub fn new(item_code: impl Into<String>, total_turnover: f64) -> Self {
        Self {
            item_code: item_code.into(),
            total_turnover,
        }
    }
}

/// Ranked position of one item in the Pareto walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcRanking {
    pub item_code: String,
    pub total_turnover: f64,
    pub percentage_of_turnover: Percentage,
    pub cumulative_percentage: Percentage,
    pub rank: u32,
    pub abc_class: AbcClass,
}

/// Assigns A/B/C tiers by cumulative share of total turnover.
pub struct AbcClassifier;

impl AbcClassifier {
    /// Ranks and classifies items.
    ///
    /// # Algorithm
    /// 1. Sort descending by turnover, ties by ascending item code
    /// 2. Walk the list accumulating turnover
    /// 3. `A` while cumulative share `<= a_threshold`, `B` while `<= b_threshold`, else `C`
    ///
    /// When the grand total is zero every item is `C` with zero percentages.
    ///
    /// # Returns
    /// Rankings in rank order (rank 1 first).
    pub fn classify(items: &[ItemTurnover], a_threshold: f64, b_threshold: f64) -> Vec<AbcRanking> {
        let mut sorted: Vec<&ItemTurnover> = items.iter().collect();
        sorted.sort_by(|a, b| Self::ranking_order(a, b));

        let grand_total: f64 = sorted.iter().map(|i| i.total_turnover).sum();
        let mut cumulative = 0.0;

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let rank = index as u32 + 1;
                if grand_total == 0.0 {
                    return AbcRanking {
                        item_code: item.item_code.clone(),
                        total_turnover: item.total_turnover,
                        percentage_of_turnover: Percentage::ZERO,
                        cumulative_percentage: Percentage::ZERO,
                        rank,
                        abc_class: AbcClass::C,
                    };
                }

                cumulative += item.total_turnover;
                let cumulative_percentage = Percentage::of(cumulative, grand_total);
                AbcRanking {
                    item_code: item.item_code.clone(),
                    total_turnover: item.total_turnover,
                    percentage_of_turnover: Percentage::of(item.total_turnover, grand_total),
                    cumulative_percentage,
                    rank,
                    abc_class: AbcClass::from_cumulative(
                        cumulative_percentage.value(),
                        a_threshold,
                        b_threshold,
                    ),
                }
            })
            .collect()
    }

    fn ranking_order(a: &ItemTurnover, b: &ItemTurnover) -> Ordering {
        b.total_turnover
            .total_cmp(&a.total_turnover)
            .then_with(|| a.item_code.cmp(&b.item_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[(&str, f64)]) -> Vec<ItemTurnover> {
        values.iter().map(|(c, t)| ItemTurnover::new(*c, *t)).collect()
    }

    fn classes(rankings: &[AbcRanking]) -> Vec<AbcClass> {
        rankings.iter().map(|r| r.abc_class).collect()
    }

    #[test]
    fn classic_pareto_split() {
        let rankings = AbcClassifier::classify(
            &items(&[("I2", 200.0), ("I3", 100.0), ("I1", 700.0)]),
            80.0,
            95.0,
        );

        let codes: Vec<&str> = rankings.iter().map(|r| r.item_code.as_str()).collect();
        assert_eq!(codes, vec!["I1", "I2", "I3"]);
        let cumulative: Vec<f64> = rankings.iter().map(|r| r.cumulative_percentage.value()).collect();
        assert!((cumulative[0] - 70.0).abs() < 1e-9);
        assert!((cumulative[1] - 90.0).abs() < 1e-9);
        assert!((cumulative[2] - 100.0).abs() < 1e-9);
        assert_eq!(classes(&rankings), vec![AbcClass::A, AbcClass::B, AbcClass::C]);
    }

    #[test]
    fn ranks_are_one_based_and_sequential() {
        let rankings = AbcClassifier::classify(&items(&[("X", 5.0), ("Y", 3.0), ("Z", 1.0)]), 80.0, 95.0);
        let ranks: Vec<u32> = rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn ties_break_by_ascending_item_code() {
        let rankings = AbcClassifier::classify(
            &items(&[("B", 100.0), ("C", 100.0), ("A", 100.0)]),
            80.0,
            95.0,
        );
        let codes: Vec<&str> = rankings.iter().map(|r| r.item_code.as_str()).collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn exact_boundary_is_class_a() {
        let rankings = AbcClassifier::classify(&items(&[("A", 80.0), ("B", 20.0)]), 80.0, 95.0);
        assert_eq!(rankings[0].abc_class, AbcClass::A);
        assert_eq!(rankings[1].abc_class, AbcClass::C);
    }

    #[test]
    fn single_item_holding_everything_is_class_c_under_a_low_threshold() {
        let rankings = AbcClassifier::classify(&items(&[("ONLY", 42.0)]), 80.0, 95.0);
        assert_eq!(rankings[0].cumulative_percentage, Percentage::HUNDRED);
        assert_eq!(rankings[0].abc_class, AbcClass::C);
    }

    #[test]
    fn zero_total_turnover_makes_everything_c() {
        let rankings = AbcClassifier::classify(&items(&[("A", 0.0), ("B", 0.0)]), 80.0, 95.0);
        assert!(rankings.iter().all(|r| r.abc_class == AbcClass::C));
        assert!(rankings.iter().all(|r| r.percentage_of_turnover == Percentage::ZERO));
        assert!(rankings.iter().all(|r| r.cumulative_percentage == Percentage::ZERO));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let rankings = AbcClassifier::classify(
            &items(&[("A", 13.0), ("B", 7.5), ("C", 2.25), ("D", 91.0)]),
            80.0,
            95.0,
        );
        let sum: f64 = rankings.iter().map(|r| r.percentage_of_turnover.value()).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_no_rankings() {
        assert!(AbcClassifier::classify(&[], 80.0, 95.0).is_empty());
    }
}
