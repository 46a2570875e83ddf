//! HTTP adapter for analysis endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalysisListResponse, AnalysisResultResponse, AnalysisSummaryResponse, DistributionResponse,
    ErrorResponse, ItemDetailResponse, MatrixCellResponse, RunAnalysisRequest, TopItemResponse,
    TopItemsParams,
};
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
