//! GetAnalysisHandler - Query handler for retrieving a stored result.

use std::sync::Arc;

use crate::domain::classification::AnalysisResult;
use crate::domain::foundation::{DomainError, ErrorCode, ResultId};
use crate::ports::AnalysisResultRepository;

/// Query to get an analysis result by ID.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub result_id: ResultId,
}

/// Handler for retrieving analysis results.
pub struct GetAnalysisHandler {
    results: Arc<dyn AnalysisResultRepository>,
}

impl GetAnalysisHandler {
    pub fn new(results: Arc<dyn AnalysisResultRepository>) -> Self {
        Self { results }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<AnalysisResult, DomainError> {
        self.results
            .find_by_id(query.result_id)
            .await?
            .ok_or_else(|| not_found(query.result_id))
    }
}

pub(super) fn not_found(result_id: ResultId) -> DomainError {
    DomainError::new(
        ErrorCode::AnalysisNotFound,
        format!("Analysis {} not found", result_id),
    )
    .with_detail("result_id", result_id.to_string())
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::domain::classification::{
        AnalysisEngine, AnalysisRequest, AnalysisSummary, Configuration, TransactionRecord,
    };
    use crate::domain::foundation::{ConfigId, Timestamp};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    pub struct MockResultRepository {
        pub results: Vec<AnalysisResult>,
    }

    #[async_trait]
    impl AnalysisResultRepository for MockResultRepository {
        async fn next_id(&self) -> Result<ResultId, DomainError> {
            Ok(ResultId::new(self.results.len() as i64 + 1))
        }

        async fn save(&self, _result: &AnalysisResult) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: ResultId) -> Result<Option<AnalysisResult>, DomainError> {
            Ok(self.results.iter().find(|r| r.result_id == id).cloned())
        }

        async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError> {
            Ok(self.results.iter().map(AnalysisResult::summary).collect())
        }
    }

    pub fn sample_result(id: i64, name: &str, analysis_date: Timestamp) -> AnalysisResult {
        let d = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let records: Vec<TransactionRecord> = (1..=12)
            .map(|i| TransactionRecord::new(format!("ART-{:02}", i), d, i as f64, (i * 100) as f64))
            .collect();
        AnalysisEngine::run_at(
            &records,
            &Configuration::standard(ConfigId::new(1), "Standard"),
            &AnalysisRequest::new(name),
            ResultId::new(id),
            analysis_date,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn returns_stored_result() {
        let repo = MockResultRepository {
            results: vec![sample_result(3, "May", Timestamp::now())],
        };
        let handler = GetAnalysisHandler::new(Arc::new(repo));

        let result = handler
            .handle(GetAnalysisQuery {
                result_id: ResultId::new(3),
            })
            .await
            .unwrap();
        assert_eq!(result.analysis_name, "May");
        assert_eq!(result.total_items, 12);
    }

    #[tokio::test]
    async fn fails_when_not_found() {
        let handler = GetAnalysisHandler::new(Arc::new(MockResultRepository { results: vec![] }));

        let err = handler
            .handle(GetAnalysisQuery {
                result_id: ResultId::new(99),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AnalysisNotFound);
        assert_eq!(err.details.get("result_id"), Some(&"99".to_string()));
    }
}
