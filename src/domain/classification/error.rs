//! Fatal analysis run errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A transaction excluded because its values would corrupt the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub item_code: String,
    pub transaction_date: NaiveDate,
    pub reason: String,
}

impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item '{}' on {}: {}",
            self.item_code, self.transaction_date, self.reason
        )
    }
}

/// Errors that abort an analysis run. No partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("No items remain after filtering: {reason}")]
    EmptyInput { reason: String },

    #[error("Invalid configuration: '{field}' {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("{rejected} transaction record(s) rejected, first was {first}")]
    DataIntegrity {
        rejected: usize,
        first: RejectedRecord,
    },
}

impl AnalysisError {
    /// Creates an empty input error.
    pub fn empty_input(reason: impl Into<String>) -> Self {
        AnalysisError::EmptyInput {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error for a field.
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the matching domain error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::EmptyInput { .. } => ErrorCode::EmptyInput,
            AnalysisError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
            AnalysisError::DataIntegrity { .. } => ErrorCode::DataIntegrity,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::EmptyInput { .. } => base,
            AnalysisError::InvalidConfiguration { field, .. } => base.with_detail("field", field),
            AnalysisError::DataIntegrity { rejected, first } => base
                .with_detail("rejected", rejected.to_string())
                .with_detail("item_code", first.item_code),
        }
    }
}
