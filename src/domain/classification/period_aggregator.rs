//! Period Aggregator - Filters transactions and sums them per item per month.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use super::{
    AnalysisError, AnalysisRequest, ItemHistory, ItemPeriodAggregate, RejectedRecord,
    TransactionRecord,
};
use crate::domain::foundation::Period;

/// Record selection derived from an [`AnalysisRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub item_codes: BTreeSet<String>,
    pub warehouse_zones: BTreeSet<String>,
}

impl TransactionFilter {
    /// Builds the filter for a request.
    pub fn from_request(request: &AnalysisRequest) -> Self {
        Self {
            start_date: request.start_date,
            end_date: request.end_date,
            item_codes: request.item_codes.iter().cloned().collect(),
            warehouse_zones: request.warehouse_zones.iter().cloned().collect(),
        }
    }

    /// Rejects an inverted date range.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(AnalysisError::invalid_configuration(
                    "start_date",
                    format!("{} is after end_date {}", start, end),
                ));
            }
        }
        Ok(())
    }

    /// Checks whether a record passes every filter.
    ///
    /// The date range is inclusive on both ends. A record without a zone never
    /// matches a non-empty zone filter.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if self.start_date.is_some_and(|start| record.transaction_date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| record.transaction_date > end) {
            return false;
        }
        if !self.item_codes.is_empty() && !self.item_codes.contains(&record.item_code) {
            return false;
        }
        if !self.warehouse_zones.is_empty() {
            match &record.warehouse_zone {
                Some(zone) if self.warehouse_zones.contains(zone) => {}
                _ => return false,
            }
        }
        true
    }
}

#[derive(Default)]
struct ItemAccumulator {
    periods: BTreeMap<Period, (f64, f64)>,
    names: BTreeMap<String, usize>,
    zones: BTreeMap<String, usize>,
    last_date: Option<NaiveDate>,
}

/// Reduces raw transactions into per-item monthly histories.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Aggregates the records that pass `filter`.
    ///
    /// # Algorithm
    /// Records failing the filter are discarded. The rest are grouped by
    /// `(item_code, month)` summing quantity and turnover. Only observed months
    /// appear in a history; gaps are not filled with zeros.
    ///
    /// # Errors
    /// - `InvalidConfiguration` when the date range is inverted
    /// - `DataIntegrity` when any matching record has a negative or non-finite value,
    ///   or when finite values sum past `f64::MAX`
    /// - `EmptyInput` when no item remains
    pub fn aggregate(
        records: &[TransactionRecord],
        filter: &TransactionFilter,
    ) -> Result<BTreeMap<String, ItemHistory>, AnalysisError> {
        filter.validate()?;

        let mut items: BTreeMap<String, ItemAccumulator> = BTreeMap::new();
        let mut rejected: Vec<RejectedRecord> = Vec::new();

        for record in records.iter().filter(|r| filter.matches(r)) {
            if let Some(reason) = record.integrity_violation() {
                tracing::warn!(
                    item_code = %record.item_code,
                    transaction_date = %record.transaction_date,
                    quantity = record.quantity,
                    turnover_value = record.turnover_value,
                    "Rejected transaction record: {}",
                    reason
                );
                rejected.push(RejectedRecord {
                    item_code: record.item_code.clone(),
                    transaction_date: record.transaction_date,
                    reason: reason.to_string(),
                });
                continue;
            }

            let acc = items.entry(record.item_code.clone()).or_default();
            let totals = acc.periods.entry(record.period()).or_insert((0.0, 0.0));
            totals.0 += record.quantity;
            totals.1 += record.turnover_value;
            acc.last_date = acc.last_date.max(Some(record.transaction_date));

            if let Some(name) = record.item_name.as_ref().filter(|n| !n.trim().is_empty()) {
                *acc.names.entry(name.clone()).or_insert(0) += 1;
            }
            if let Some(zone) = record.warehouse_zone.as_ref().filter(|z| !z.trim().is_empty()) {
                *acc.zones.entry(zone.clone()).or_insert(0) += 1;
            }
        }

        let rejected_count = rejected.len();
        if let Some(first) = rejected.into_iter().next() {
            return Err(AnalysisError::DataIntegrity {
                rejected: rejected_count,
                first,
            });
        }

        if items.is_empty() {
            return Err(AnalysisError::empty_input(
                "no transaction matched the date range and filters",
            ));
        }

        let mut histories = BTreeMap::new();
        let mut running_quantity = 0.0_f64;
        let mut running_turnover = 0.0_f64;

        for (item_code, acc) in items {
            let periods: Vec<ItemPeriodAggregate> = acc
                .periods
                .into_iter()
                .map(|(period, (quantity, turnover))| ItemPeriodAggregate {
                    item_code: item_code.clone(),
                    period,
                    total_quantity: quantity,
                    total_turnover: turnover,
                })
                .collect();
            let history = ItemHistory {
                item_code: item_code.clone(),
                item_name: most_frequent(acc.names),
                warehouse_zone: most_frequent(acc.zones),
                periods,
            };

            // Totals are non-negative; the first non-finite running sum marks the item.
            running_quantity += history.total_quantity();
            running_turnover += history.total_turnover();
            let overflow = if !running_quantity.is_finite() {
                Some("quantity total overflows")
            } else if !running_turnover.is_finite() {
                Some("turnover total overflows")
            } else {
                None
            };
            if let (Some(reason), Some(transaction_date)) = (overflow, acc.last_date) {
                tracing::warn!(item_code = %item_code, "Rejected item totals: {}", reason);
                return Err(AnalysisError::DataIntegrity {
                    rejected: 1,
                    first: RejectedRecord {
                        item_code,
                        transaction_date,
                        reason: reason.to_string(),
                    },
                });
            }

            histories.insert(item_code, history);
        }

        Ok(histories)
    }
}

/// Most frequent value; ties resolve to the lexicographically smallest.
fn most_frequent(counts: BTreeMap<String, usize>) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}
