//! In-Memory Transaction Source Adapter
//!
//! Holds transaction records loaded at start-up (e.g. from a CSV file).

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::classification::{AnalysisRequest, TransactionFilter, TransactionRecord};
use crate::domain::foundation::DomainError;
use crate::ports::TransactionSource;

/// In-memory transaction store
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionSource {
    records: Arc<RwLock<Vec<TransactionRecord>>>,
}

impl InMemoryTransactionSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding the given records
    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Append records
    pub async fn extend(&self, records: impl IntoIterator<Item = TransactionRecord>) {
        self.records.write().await.extend(records);
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionSource for InMemoryTransactionSource {
    async fn fetch(&self, request: &AnalysisRequest) -> Result<Vec<TransactionRecord>, DomainError> {
        let filter = TransactionFilter::from_request(request);
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, 1).unwrap()
    }

    #[tokio::test]
    async fn fetch_prefilters_by_request() {
        let source = InMemoryTransactionSource::with_records(vec![
            TransactionRecord::new("A", date(1), 1.0, 1.0),
            TransactionRecord::new("B", date(2), 1.0, 1.0),
            TransactionRecord::new("C", date(3), 1.0, 1.0),
        ]);
        let request = AnalysisRequest::new("Feb+").with_date_range(date(2), date(12));

        let records = source.fetch(&request).await.unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.item_code.as_str()).collect();
        assert_eq!(codes, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn extend_appends_records() {
        let source = InMemoryTransactionSource::new();
        assert!(source.is_empty().await);
        source
            .extend(vec![TransactionRecord::new("A", date(1), 1.0, 1.0)])
            .await;
        assert_eq!(source.len().await, 1);
        assert_eq!(source.fetch(&AnalysisRequest::new("all")).await.unwrap().len(), 1);
    }
}
