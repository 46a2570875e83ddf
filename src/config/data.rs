//! Data source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where transaction data is loaded from at start-up
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Optional CSV file with transaction records
    pub transactions_csv: Option<PathBuf>,
}

impl DataConfig {
    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.transactions_csv {
            Some(path) if !path.is_file() => Err(ValidationError::TransactionsFileNotFound(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}
