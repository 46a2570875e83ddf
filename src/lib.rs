//! ABC-XYZ - Inventory classification and replenishment engine
//!
//! Classifies items by turnover value (ABC) and demand variability (XYZ),
//! cross-tabulates both and derives safety stock, reorder point and maximum
//! stock per item.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
