//! CSV transaction data loader.
//!
//! Expected CSV columns:
//!   item_code, transaction_date, quantity, turnover_value, item_name, warehouse_zone
//!
//! Dates are `YYYY-MM-DD`. The last two columns are optional and may be
//! empty or missing entirely.

use std::io::Read;
use std::path::Path;

use crate::domain::classification::TransactionRecord;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Load transaction records from a CSV reader.
pub fn load_transactions<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, DomainError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: TransactionRecord = result.map_err(|e| {
            DomainError::new(
                ErrorCode::DataSourceError,
                format!("CSV parse error at line {}: {}", line_num + 2, e),
            )
            .with_detail("line", (line_num + 2).to_string())
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Load transaction records from a CSV file path.
pub fn load_transactions_file(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, DomainError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        DomainError::new(
            ErrorCode::DataSourceError,
            format!("Failed to open '{}': {}", path.display(), e),
        )
    })?;
    let records = load_transactions(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded transactions");
    Ok(records)
}
