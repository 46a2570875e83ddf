//! Raw transactions and their per-period aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Period;

/// One externally produced movement of an item (e.g. a picking line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub item_code: String,
    pub transaction_date: NaiveDate,
    pub quantity: f64,
    pub turnover_value: f64,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub warehouse_zone: Option<String>,
}

impl TransactionRecord {
    /// Creates a record without name or zone.
    pub fn new(
        item_code: impl Into<String>,
        transaction_date: NaiveDate,
        quantity: f64,
        turnover_value: f64,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            transaction_date,
            quantity,
            turnover_value,
            item_name: None,
            warehouse_zone: None,
        }
    }

    /// Sets the item description.
    pub fn with_item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    /// Sets the warehouse zone.
    pub fn with_warehouse_zone(mut self, warehouse_zone: impl Into<String>) -> Self {
        self.warehouse_zone = Some(warehouse_zone.into());
        self
    }

    /// Month this record is aggregated into.
    pub fn period(&self) -> Period {
        Period::from_date(self.transaction_date)
    }

    /// Describes why this record cannot enter the totals, if it cannot.
    pub fn integrity_violation(&self) -> Option<&'static str> {
        if self.item_code.trim().is_empty() {
            Some("empty item code")
        } else if !self.quantity.is_finite() {
            Some("non-finite quantity")
        } else if self.quantity < 0.0 {
            Some("negative quantity")
        } else if !self.turnover_value.is_finite() {
            Some("non-finite turnover value")
        } else if self.turnover_value < 0.0 {
            Some("negative turnover value")
        } else {
            None
        }
    }
}

/// Quantity and turnover of one item within one observed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPeriodAggregate {
    pub item_code: String,
    pub period: Period,
    pub total_quantity: f64,
    pub total_turnover: f64,
}

/// All observed periods of one item, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHistory {
    pub item_code: String,
    pub item_name: Option<String>,
    pub warehouse_zone: Option<String>,
    pub periods: Vec<ItemPeriodAggregate>,
}

impl ItemHistory {
    /// Turnover summed across all periods.
    pub fn total_turnover(&self) -> f64 {
        self.periods.iter().map(|p| p.total_turnover).sum()
    }

    /// Quantity summed across all periods.
    pub fn total_quantity(&self) -> f64 {
        self.periods.iter().map(|p| p.total_quantity).sum()
    }

    /// Per-period quantities in chronological order.
    pub fn quantities(&self) -> Vec<f64> {
        self.periods.iter().map(|p| p.total_quantity).collect()
    }
}
