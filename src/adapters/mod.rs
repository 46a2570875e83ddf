//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory ports for development and tests
//! - `csv_source` - Transaction loading from CSV files
//! - `http` - REST API (axum)

pub mod csv_source;
pub mod http;
pub mod memory;

pub use csv_source::{load_transactions, load_transactions_file};
pub use memory::{InMemoryAnalysisResultStore, InMemoryConfigurationStore, InMemoryTransactionSource};
