//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TransactionSource` - Supplies raw transaction records
//! - `ConfigurationReader` - Looks up thresholds and factors
//! - `AnalysisResultRepository` - Stores and lists completed results

mod analysis_result_repository;
mod configuration_reader;
mod transaction_source;

pub use analysis_result_repository::AnalysisResultRepository;
pub use configuration_reader::ConfigurationReader;
pub use transaction_source::TransactionSource;
