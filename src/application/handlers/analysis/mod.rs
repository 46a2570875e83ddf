//! Analysis command and query handlers.

mod get_analysis;
mod get_analysis_summary;
mod list_analyses;
mod run_analysis;

pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
pub use get_analysis_summary::{GetAnalysisSummaryHandler, GetAnalysisSummaryQuery, GetTopItemsQuery};
pub use list_analyses::{ListAnalysesHandler, ListAnalysesQuery};
pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler};
