//! ListAnalysesHandler - Query handler for listing stored results.

use std::sync::Arc;

use crate::domain::classification::AnalysisSummary;
use crate::domain::foundation::DomainError;
use crate::ports::AnalysisResultRepository;

/// Query to list all stored analyses.
#[derive(Debug, Clone, Default)]
pub struct ListAnalysesQuery;

/// Handler for listing analyses, newest first.
pub struct ListAnalysesHandler {
    results: Arc<dyn AnalysisResultRepository>,
}

impl ListAnalysesHandler {
    pub fn new(results: Arc<dyn AnalysisResultRepository>) -> Self {
        Self { results }
    }

    pub async fn handle(&self, _query: ListAnalysesQuery) -> Result<Vec<AnalysisSummary>, DomainError> {
        let mut summaries = self.results.list_summaries().await?;
        summaries.sort_by(|a, b| {
            b.analysis_date
                .cmp(&a.analysis_date)
                .then_with(|| b.result_id.cmp(&a.result_id))
        });
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::analysis::get_analysis::tests::{sample_result, MockResultRepository};
    use crate::domain::foundation::{ResultId, Timestamp};
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn lists_newest_first() {
        let now = Utc::now();
        let repo = MockResultRepository {
            results: vec![
                sample_result(1, "Old", Timestamp::from_datetime(now - Duration::days(2))),
                sample_result(2, "Newest", Timestamp::from_datetime(now)),
                sample_result(3, "Middle", Timestamp::from_datetime(now - Duration::days(1))),
            ],
        };
        let handler = ListAnalysesHandler::new(Arc::new(repo));

        let summaries = handler.handle(ListAnalysesQuery).await.unwrap();
        let ids: Vec<ResultId> = summaries.iter().map(|s| s.result_id).collect();
        assert_eq!(ids, vec![ResultId::new(2), ResultId::new(3), ResultId::new(1)]);
    }

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let handler = ListAnalysesHandler::new(Arc::new(MockResultRepository { results: vec![] }));
        assert!(handler.handle(ListAnalysesQuery).await.unwrap().is_empty());
    }
}
