//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_analysis, get_analysis_summary, get_top_items, list_analyses, run_analysis,
    AnalysisHandlers,
};

/// Creates the analysis router, meant to be nested under `/api/analysis`.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/", get(list_analyses))
        .route("/run", post(run_analysis))
        .route("/:id", get(get_analysis))
        .route("/:id/summary", get(get_analysis_summary))
        .route("/:id/top-items", get(get_top_items))
        .with_state(handlers)
}
