//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the classification domain.

mod errors;
mod ids;
mod percentage;
mod period;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConfigId, ResultId};
pub use percentage::{round_to_hundredths, Percentage};
pub use period::Period;
pub use timestamp::Timestamp;
