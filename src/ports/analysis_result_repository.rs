//! AnalysisResultRepository port - stores completed analysis results.

use async_trait::async_trait;

use crate::domain::classification::{AnalysisResult, AnalysisSummary};
use crate::domain::foundation::{DomainError, ResultId};

/// Repository for analysis results.
#[async_trait]
pub trait AnalysisResultRepository: Send + Sync {
    /// Reserve the identifier of the next result.
    async fn next_id(&self) -> Result<ResultId, DomainError>;

    /// Save a completed result, replacing any result with the same id.
    async fn save(&self, result: &AnalysisResult) -> Result<(), DomainError>;

    /// Find a result by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: ResultId) -> Result<Option<AnalysisResult>, DomainError>;

    /// List summaries of all stored results, newest first.
    async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn analysis_result_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AnalysisResultRepository) {}
    }
}
