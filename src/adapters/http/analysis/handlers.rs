//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::analysis::{
    GetAnalysisHandler, GetAnalysisQuery, GetAnalysisSummaryHandler, GetAnalysisSummaryQuery,
    GetTopItemsQuery, ListAnalysesHandler, ListAnalysesQuery, RunAnalysisCommand,
    RunAnalysisHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, ResultId};

use super::dto::{
    AnalysisListResponse, AnalysisResultResponse, AnalysisSummaryResponse, ErrorResponse,
    RunAnalysisRequest, TopItemResponse, TopItemsParams,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    run_handler: Arc<RunAnalysisHandler>,
    get_handler: Arc<GetAnalysisHandler>,
    summary_handler: Arc<GetAnalysisSummaryHandler>,
    list_handler: Arc<ListAnalysesHandler>,
    default_top_items: usize,
}

impl AnalysisHandlers {
    pub fn new(
        run_handler: Arc<RunAnalysisHandler>,
        get_handler: Arc<GetAnalysisHandler>,
        summary_handler: Arc<GetAnalysisSummaryHandler>,
        list_handler: Arc<ListAnalysesHandler>,
        default_top_items: usize,
    ) -> Self {
        Self {
            run_handler,
            get_handler,
            summary_handler,
            list_handler,
            default_top_items,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis/run - Run a new analysis
pub async fn run_analysis(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<RunAnalysisRequest>,
) -> Response {
    let cmd = RunAnalysisCommand { request: req.into() };

    match handlers.run_handler.handle(cmd).await {
        Ok(result) => {
            let response: AnalysisResultResponse = result.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/analysis - List stored analyses, newest first
pub async fn list_analyses(State(handlers): State<AnalysisHandlers>) -> Response {
    match handlers.list_handler.handle(ListAnalysesQuery).await {
        Ok(summaries) => {
            let response: AnalysisListResponse = summaries.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/analysis/:id - Get a full analysis result
pub async fn get_analysis(
    State(handlers): State<AnalysisHandlers>,
    Path(result_id): Path<String>,
) -> Response {
    let result_id = match parse_result_id(&result_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetAnalysisQuery { result_id }).await {
        Ok(result) => {
            let response: AnalysisResultResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/analysis/:id/summary - Get class counts of an analysis
pub async fn get_analysis_summary(
    State(handlers): State<AnalysisHandlers>,
    Path(result_id): Path<String>,
) -> Response {
    let result_id = match parse_result_id(&result_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .summary_handler
        .handle(GetAnalysisSummaryQuery { result_id })
        .await
    {
        Ok(summary) => {
            let response: AnalysisSummaryResponse = summary.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/analysis/:id/top-items - Get the highest ranked items
pub async fn get_top_items(
    State(handlers): State<AnalysisHandlers>,
    Path(result_id): Path<String>,
    Query(params): Query<TopItemsParams>,
) -> Response {
    let result_id = match parse_result_id(&result_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetTopItemsQuery {
        result_id,
        limit: params.limit.unwrap_or(handlers.default_top_items),
    };

    match handlers.summary_handler.top_items(query).await {
        Ok(items) => {
            let response: Vec<TopItemResponse> = items.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

fn parse_result_id(raw: &str) -> Result<ResultId, Response> {
    raw.parse::<ResultId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid analysis ID: {}", raw))),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::EmptyInput | ErrorCode::InvalidConfiguration | ErrorCode::DataIntegrity => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::ConfigurationNotFound | ErrorCode::AnalysisNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DataSourceError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_analysis_error(error: DomainError) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, "Analysis request failed: {}", error.message);
    }

    let mut body = ErrorResponse::new(error.code.to_string(), error.message);
    if !error.details.is_empty() {
        body = body.with_details(serde_json::json!(error.details));
    }
    (status, Json(body)).into_response()
}
