//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `classification` - ABC-XYZ analysis engine (aggregation, classifiers, matrix, replenishment)

pub mod classification;
pub mod foundation;
