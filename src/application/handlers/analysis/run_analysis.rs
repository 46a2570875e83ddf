//! RunAnalysisHandler - Command handler for running an ABC-XYZ analysis.

use std::sync::Arc;

use crate::domain::classification::{AnalysisEngine, AnalysisRequest, AnalysisResult, Configuration};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{AnalysisResultRepository, ConfigurationReader, TransactionSource};

/// Command to run an analysis.
#[derive(Debug, Clone)]
pub struct RunAnalysisCommand {
    pub request: AnalysisRequest,
}

/// Handler for running analyses.
pub struct RunAnalysisHandler {
    transactions: Arc<dyn TransactionSource>,
    configurations: Arc<dyn ConfigurationReader>,
    results: Arc<dyn AnalysisResultRepository>,
}

impl RunAnalysisHandler {
    pub fn new(
        transactions: Arc<dyn TransactionSource>,
        configurations: Arc<dyn ConfigurationReader>,
        results: Arc<dyn AnalysisResultRepository>,
    ) -> Self {
        Self {
            transactions,
            configurations,
            results,
        }
    }

    pub async fn handle(&self, cmd: RunAnalysisCommand) -> Result<AnalysisResult, DomainError> {
        let request = cmd.request;

        // 1. Validate command
        if request.analysis_name.trim().is_empty() {
            return Err(ValidationError::empty_field("analysis_name").into());
        }

        // 2. Resolve configuration and fetch transactions concurrently
        let (configuration, transactions) = futures::try_join!(
            self.resolve_configuration(&request),
            self.transactions.fetch(&request),
        )?;

        // 3. Run the engine off the async runtime
        let result_id = self.results.next_id().await?;
        let result = tokio::task::spawn_blocking(move || {
            AnalysisEngine::run(&transactions, &configuration, &request, result_id)
        })
        .await
        .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("Analysis task failed: {}", e)))??;

        // 4. Persist result
        self.results.save(&result).await?;

        tracing::info!(
            result_id = %result.result_id,
            config_id = %result.config_id,
            total_items = result.total_items,
            "Analysis result saved"
        );

        Ok(result)
    }

    async fn resolve_configuration(&self, request: &AnalysisRequest) -> Result<Configuration, DomainError> {
        match request.config_id {
            Some(id) => self.configurations.find_by_id(id).await?.ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ConfigurationNotFound,
                    format!("Configuration {} not found", id),
                )
                .with_detail("config_id", id.to_string())
            }),
            None => self.configurations.find_default().await?.ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ConfigurationNotFound,
                    "No default configuration is defined",
                )
            }),
        }
    }
}
