//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    GetAnalysisHandler, GetAnalysisQuery, GetAnalysisSummaryHandler, GetAnalysisSummaryQuery,
    GetTopItemsQuery, ListAnalysesHandler, ListAnalysesQuery, RunAnalysisCommand,
    RunAnalysisHandler,
};
