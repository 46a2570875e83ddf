//! In-Memory Analysis Result Store Adapter

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::classification::{AnalysisResult, AnalysisSummary};
use crate::domain::foundation::{DomainError, ResultId};
use crate::ports::AnalysisResultRepository;

/// In-memory storage for analysis results with a monotonic id sequence
#[derive(Debug, Clone)]
pub struct InMemoryAnalysisResultStore {
    results: Arc<RwLock<BTreeMap<ResultId, AnalysisResult>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryAnalysisResultStore {
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(BTreeMap::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Get the number of stored results
    pub async fn count(&self) -> usize {
        self.results.read().await.len()
    }
}

impl Default for InMemoryAnalysisResultStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisResultRepository for InMemoryAnalysisResultStore {
    async fn next_id(&self) -> Result<ResultId, DomainError> {
        Ok(ResultId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1))
    }

    async fn save(&self, result: &AnalysisResult) -> Result<(), DomainError> {
        self.results
            .write()
            .await
            .insert(result.result_id, result.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ResultId) -> Result<Option<AnalysisResult>, DomainError> {
        Ok(self.results.read().await.get(&id).cloned())
    }

    async fn list_summaries(&self) -> Result<Vec<AnalysisSummary>, DomainError> {
        let results = self.results.read().await;
        let mut summaries: Vec<AnalysisSummary> =
            results.values().map(AnalysisResult::summary).collect();
        summaries.sort_by(|a, b| {
            b.analysis_date
                .cmp(&a.analysis_date)
                .then_with(|| b.result_id.cmp(&a.result_id))
        });
        Ok(summaries)
    }
}
