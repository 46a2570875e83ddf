//! Parameters of a single analysis run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConfigId;

/// What to analyse: a name, the configuration to use and optional filters.
///
/// Empty `warehouse_zones` / `item_codes` mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub analysis_name: String,
    #[serde(default)]
    pub config_id: Option<ConfigId>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub warehouse_zones: Vec<String>,
    #[serde(default)]
    pub item_codes: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl AnalysisRequest {
    /// Creates an unfiltered request.
    pub fn new(analysis_name: impl Into<String>) -> Self {
        Self {
            analysis_name: analysis_name.into(),
            ..Default::default()
        }
    }

    /// Selects a configuration by id instead of the default one.
    pub fn with_config(mut self, config_id: ConfigId) -> Self {
        self.config_id = Some(config_id);
        self
    }

    /// Restricts the run to an inclusive date range.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Restricts the run to the given item codes.
    pub fn with_item_codes<I, S>(mut self, item_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_codes = item_codes.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the run to the given warehouse zones.
    pub fn with_warehouse_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warehouse_zones = zones.into_iter().map(Into::into).collect();
        self
    }

    /// Records who started the run.
    pub fn created_by(mut self, user: impl Into<String>) -> Self {
        self.created_by = Some(user.into());
        self
    }
}
