//! Classification Module - Pure ABC-XYZ inventory analysis.
//!
//! Partitions items into value tiers (A/B/C, by cumulative turnover share)
//! and demand-variability tiers (X/Y/Z, by coefficient of variation),
//! cross-tabulates both and derives replenishment levels.
//!
//! # Components
//!
//! - `PeriodAggregator` - Filters transactions and sums them per item per month
//! - `AbcClassifier` - Pareto ranking by total turnover
//! - `XyzClassifier` - Population coefficient of variation of monthly quantity
//! - `MatrixComposer` - 3x3 ABC x XYZ grid
//! - `ReplenishmentCalculator` - Safety stock, reorder point and max stock
//! - `ResultAssembler` - Builds the final `AnalysisResult`
//! - `AnalysisEngine` - Runs the whole pipeline
//!
//! # Design Philosophy
//!
//! Everything here is synchronous and free of I/O. The ABC and XYZ passes are
//! independent and run in parallel on the rayon pool.

mod abc_classifier;
mod classes;
mod configuration;
mod engine;
mod error;
mod matrix_composer;
mod period_aggregator;
mod replenishment;
mod request;
mod result;
mod result_assembler;
mod slotting;
mod transaction;
mod xyz_classifier;

pub use abc_classifier::{AbcClassifier, AbcRanking, ItemTurnover};
pub use classes::{AbcClass, XyzClass};
pub use configuration::{
    Configuration, DEFAULT_ABC_A_THRESHOLD, DEFAULT_ABC_B_THRESHOLD, DEFAULT_LEAD_TIME_WEEKS,
    DEFAULT_MAX_QTY_A_FACTOR, DEFAULT_MAX_QTY_B_FACTOR, DEFAULT_MAX_QTY_C_FACTOR,
    DEFAULT_SAFETY_STOCK_X_FACTOR, DEFAULT_SAFETY_STOCK_Y_FACTOR, DEFAULT_SAFETY_STOCK_Z_FACTOR,
    DEFAULT_XYZ_X_THRESHOLD, DEFAULT_XYZ_Y_THRESHOLD,
};
pub use engine::AnalysisEngine;
pub use error::{AnalysisError, RejectedRecord};
pub use matrix_composer::{MatrixCell, MatrixComposer};
pub use period_aggregator::{PeriodAggregator, TransactionFilter};
pub use replenishment::{ReplenishmentCalculator, ReplenishmentRecommendation, WEEKS_PER_MONTH};
pub use request::AnalysisRequest;
pub use result::{
    AnalysisResult, AnalysisSummary, ClassDistribution, ItemClassification, ItemDetail,
    MonthlyFigure, TopItem,
};
pub use result_assembler::{AssemblyParts, ResultAssembler};
pub use slotting::SlottingHint;
pub use transaction::{ItemHistory, ItemPeriodAggregate, TransactionRecord};
pub use xyz_classifier::{DemandVariability, XyzClassifier};
