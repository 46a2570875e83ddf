//! GetAnalysisSummaryHandler - Query handler for result overviews and top items.

use std::sync::Arc;

use super::get_analysis::not_found;
use crate::domain::classification::{AnalysisSummary, TopItem};
use crate::domain::foundation::{DomainError, ResultId};
use crate::ports::AnalysisResultRepository;

/// Query to get the class counts of a result.
#[derive(Debug, Clone)]
pub struct GetAnalysisSummaryQuery {
    pub result_id: ResultId,
}

/// Query to get the highest ranked items of a result.
#[derive(Debug, Clone)]
pub struct GetTopItemsQuery {
    pub result_id: ResultId,
    pub limit: usize,
}

/// Handler for summary and top item projections of stored results.
pub struct GetAnalysisSummaryHandler {
    results: Arc<dyn AnalysisResultRepository>,
}

impl GetAnalysisSummaryHandler {
    pub fn new(results: Arc<dyn AnalysisResultRepository>) -> Self {
        Self { results }
    }

    pub async fn handle(&self, query: GetAnalysisSummaryQuery) -> Result<AnalysisSummary, DomainError> {
        let result = self
            .results
            .find_by_id(query.result_id)
            .await?
            .ok_or_else(|| not_found(query.result_id))?;
        Ok(result.summary())
    }

    pub async fn top_items(&self, query: GetTopItemsQuery) -> Result<Vec<TopItem>, DomainError> {
        let result = self
            .results
            .find_by_id(query.result_id)
            .await?
            .ok_or_else(|| not_found(query.result_id))?;
        Ok(result.top_items(query.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::analysis::get_analysis::tests::{sample_result, MockResultRepository};
    use crate::domain::classification::AbcClass;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    fn handler() -> GetAnalysisSummaryHandler {
        GetAnalysisSummaryHandler::new(Arc::new(MockResultRepository {
            results: vec![sample_result(1, "May", Timestamp::now())],
        }))
    }

    #[tokio::test]
    async fn summary_counts_match_result() {
        let summary = handler()
            .handle(GetAnalysisSummaryQuery {
                result_id: ResultId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(summary.total_items, 12);
        let abc_total: usize = summary.abc_distribution.values().sum();
        let xyz_total: usize = summary.xyz_distribution.values().sum();
        assert_eq!(abc_total, 12);
        assert_eq!(xyz_total, 12);
        assert!(summary.abc_distribution[&AbcClass::A] > 0);
    }

    #[tokio::test]
    async fn top_items_are_in_rank_order_and_limited() {
        let items = handler()
            .top_items(GetTopItemsQuery {
                result_id: ResultId::new(1),
                limit: 5,
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0].item_code, "ART-12");
        assert!(items.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(items[0].monthly.len(), 1);
    }

    #[tokio::test]
    async fn missing_result_is_not_found() {
        let err = handler()
            .handle(GetAnalysisSummaryQuery {
                result_id: ResultId::new(8),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AnalysisNotFound);
    }
}
