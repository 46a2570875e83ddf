//! Analysis configuration
//!
//! Seeds the default classification configuration and read-side limits.

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::classification::{
    Configuration, DEFAULT_ABC_A_THRESHOLD, DEFAULT_ABC_B_THRESHOLD, DEFAULT_LEAD_TIME_WEEKS,
    DEFAULT_MAX_QTY_A_FACTOR, DEFAULT_MAX_QTY_B_FACTOR, DEFAULT_MAX_QTY_C_FACTOR,
    DEFAULT_SAFETY_STOCK_X_FACTOR, DEFAULT_SAFETY_STOCK_Y_FACTOR, DEFAULT_SAFETY_STOCK_Z_FACTOR,
    DEFAULT_XYZ_X_THRESHOLD, DEFAULT_XYZ_Y_THRESHOLD,
};
use crate::domain::foundation::ConfigId;

/// Analysis settings
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// Id of the seeded default configuration
    #[serde(default = "default_config_id")]
    pub default_config_id: i64,

    /// Name of the seeded default configuration
    #[serde(default = "default_config_name")]
    pub default_config_name: String,

    #[serde(default = "default_abc_a")]
    pub abc_a_threshold: f64,
    #[serde(default = "default_abc_b")]
    pub abc_b_threshold: f64,
    #[serde(default = "default_xyz_x")]
    pub xyz_x_threshold: f64,
    #[serde(default = "default_xyz_y")]
    pub xyz_y_threshold: f64,
    #[serde(default = "default_lead_time")]
    pub lead_time_weeks: f64,
    #[serde(default = "default_safety_x")]
    pub safety_stock_x_factor: f64,
    #[serde(default = "default_safety_y")]
    pub safety_stock_y_factor: f64,
    #[serde(default = "default_safety_z")]
    pub safety_stock_z_factor: f64,
    #[serde(default = "default_max_a")]
    pub max_qty_a_factor: f64,
    #[serde(default = "default_max_b")]
    pub max_qty_b_factor: f64,
    #[serde(default = "default_max_c")]
    pub max_qty_c_factor: f64,

    /// Default number of items returned by the top-items endpoint
    #[serde(default = "default_top_items_limit")]
    pub top_items_limit: usize,
}

impl AnalysisSettings {
    /// Builds the seed configuration, flagged as default.
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            config_id: ConfigId::new(self.default_config_id),
            config_name: self.default_config_name.clone(),
            description: Some("Seeded from application configuration".to_string()),
            abc_a_threshold: self.abc_a_threshold,
            abc_b_threshold: self.abc_b_threshold,
            xyz_x_threshold: self.xyz_x_threshold,
            xyz_y_threshold: self.xyz_y_threshold,
            lead_time_weeks: self.lead_time_weeks,
            safety_stock_x_factor: self.safety_stock_x_factor,
            safety_stock_y_factor: self.safety_stock_y_factor,
            safety_stock_z_factor: self.safety_stock_z_factor,
            max_qty_a_factor: self.max_qty_a_factor,
            max_qty_b_factor: self.max_qty_b_factor,
            max_qty_c_factor: self.max_qty_c_factor,
            is_default: false,
        }
        .as_default()
    }

    /// Validate analysis settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_items_limit == 0 {
            return Err(ValidationError::InvalidTopItemsLimit);
        }
        self.to_configuration()
            .validate()
            .map_err(|e| ValidationError::InvalidSeedConfiguration(e.to_string()))
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_config_id: default_config_id(),
            default_config_name: default_config_name(),
            abc_a_threshold: default_abc_a(),
            abc_b_threshold: default_abc_b(),
            xyz_x_threshold: default_xyz_x(),
            xyz_y_threshold: default_xyz_y(),
            lead_time_weeks: default_lead_time(),
            safety_stock_x_factor: default_safety_x(),
            safety_stock_y_factor: default_safety_y(),
            safety_stock_z_factor: default_safety_z(),
            max_qty_a_factor: default_max_a(),
            max_qty_b_factor: default_max_b(),
            max_qty_c_factor: default_max_c(),
            top_items_limit: default_top_items_limit(),
        }
    }
}

fn default_config_id() -> i64 {
    1
}

fn default_config_name() -> String {
    "Standard".to_string()
}

fn default_abc_a() -> f64 {
    DEFAULT_ABC_A_THRESHOLD
}

fn default_abc_b() -> f64 {
    DEFAULT_ABC_B_THRESHOLD
}

fn default_xyz_x() -> f64 {
    DEFAULT_XYZ_X_THRESHOLD
}

fn default_xyz_y() -> f64 {
    DEFAULT_XYZ_Y_THRESHOLD
}

fn default_lead_time() -> f64 {
    DEFAULT_LEAD_TIME_WEEKS
}

fn default_safety_x() -> f64 {
    DEFAULT_SAFETY_STOCK_X_FACTOR
}

fn default_safety_y() -> f64 {
    DEFAULT_SAFETY_STOCK_Y_FACTOR
}

fn default_safety_z() -> f64 {
    DEFAULT_SAFETY_STOCK_Z_FACTOR
}

fn default_max_a() -> f64 {
    DEFAULT_MAX_QTY_A_FACTOR
}

fn default_max_b() -> f64 {
    DEFAULT_MAX_QTY_B_FACTOR
}

fn default_max_c() -> f64 {
    DEFAULT_MAX_QTY_C_FACTOR
}

fn default_top_items_limit() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_configuration() {
        let seeded = AnalysisSettings::default().to_configuration();
        let standard = Configuration::standard(ConfigId::new(1), "Standard");

        assert!(seeded.is_default);
        assert_eq!(seeded.abc_a_threshold, standard.abc_a_threshold);
        assert_eq!(seeded.xyz_y_threshold, standard.xyz_y_threshold);
        assert_eq!(seeded.max_qty_c_factor, standard.max_qty_c_factor);
        assert!(AnalysisSettings::default().validate().is_ok());
    }

    #[test]
    fn invalid_thresholds_fail_validation() {
        let settings = AnalysisSettings {
            abc_a_threshold: 90.0,
            abc_b_threshold: 80.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidSeedConfiguration(_))
        ));
    }

    #[test]
    fn zero_top_items_limit_fails_validation() {
        let settings = AnalysisSettings {
            top_items_limit: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ValidationError::InvalidTopItemsLimit)));
    }
}
