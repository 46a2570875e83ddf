//! HTTP adapters - REST API implementations.

pub mod analysis;

pub use analysis::{analysis_routes, AnalysisHandlers};

use axum::Router;

/// Mounts every API router under its `/api` prefix.
pub fn api_router(handlers: AnalysisHandlers) -> Router {
    Router::new().nest("/api/analysis", analysis_routes(handlers))
}
