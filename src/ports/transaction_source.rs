//! TransactionSource port - supplies raw transactions for a run.

use async_trait::async_trait;

use crate::domain::classification::{AnalysisRequest, TransactionRecord};
use crate::domain::foundation::DomainError;

/// Source of transaction records.
///
/// Implementations may pre-filter by the request's date range, items and
/// zones; the engine applies the same filters again, so returning a superset
/// is always correct.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch the records relevant to a request.
    async fn fetch(&self, request: &AnalysisRequest) -> Result<Vec<TransactionRecord>, DomainError>;
}
