//! In-memory implementations of the analysis ports.

mod analysis_result_store;
mod configuration_store;
mod transaction_source;

pub use analysis_result_store::InMemoryAnalysisResultStore;
pub use configuration_store::InMemoryConfigurationStore;
pub use transaction_source::InMemoryTransactionSource;
