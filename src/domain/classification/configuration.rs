//! Classification thresholds and replenishment factors.

use serde::{Deserialize, Serialize};

use super::{AbcClass, AnalysisError, XyzClass};
use crate::domain::foundation::ConfigId;

pub const DEFAULT_ABC_A_THRESHOLD: f64 = 80.0;
pub const DEFAULT_ABC_B_THRESHOLD: f64 = 95.0;
pub const DEFAULT_XYZ_X_THRESHOLD: f64 = 20.0;
pub const DEFAULT_XYZ_Y_THRESHOLD: f64 = 40.0;
pub const DEFAULT_LEAD_TIME_WEEKS: f64 = 2.0;
pub const DEFAULT_SAFETY_STOCK_X_FACTOR: f64 = 1.0;
pub const DEFAULT_SAFETY_STOCK_Y_FACTOR: f64 = 1.5;
pub const DEFAULT_SAFETY_STOCK_Z_FACTOR: f64 = 2.5;
pub const DEFAULT_MAX_QTY_A_FACTOR: f64 = 1.5;
pub const DEFAULT_MAX_QTY_B_FACTOR: f64 = 2.0;
pub const DEFAULT_MAX_QTY_C_FACTOR: f64 = 3.0;

/// Thresholds and factors for one analysis run.
///
/// Selected by the caller and never mutated by the engine. Thresholds are
/// percentages: ABC thresholds apply to cumulative turnover share, XYZ
/// thresholds to the coefficient of variation (which has no upper bound).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub config_id: ConfigId,
    pub config_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub abc_a_threshold: f64,
    pub abc_b_threshold: f64,
    pub xyz_x_threshold: f64,
    pub xyz_y_threshold: f64,
    pub lead_time_weeks: f64,
    pub safety_stock_x_factor: f64,
    pub safety_stock_y_factor: f64,
    pub safety_stock_z_factor: f64,
    pub max_qty_a_factor: f64,
    pub max_qty_b_factor: f64,
    pub max_qty_c_factor: f64,
    #[serde(default)]
    pub is_default: bool,
}

impl Configuration {
    /// Creates a configuration with the standard 80/95 and 20/40 thresholds.
    pub fn standard(config_id: ConfigId, config_name: impl Into<String>) -> Self {
        Self {
            config_id,
            config_name: config_name.into(),
            description: None,
            abc_a_threshold: DEFAULT_ABC_A_THRESHOLD,
            abc_b_threshold: DEFAULT_ABC_B_THRESHOLD,
            xyz_x_threshold: DEFAULT_XYZ_X_THRESHOLD,
            xyz_y_threshold: DEFAULT_XYZ_Y_THRESHOLD,
            lead_time_weeks: DEFAULT_LEAD_TIME_WEEKS,
            safety_stock_x_factor: DEFAULT_SAFETY_STOCK_X_FACTOR,
            safety_stock_y_factor: DEFAULT_SAFETY_STOCK_Y_FACTOR,
            safety_stock_z_factor: DEFAULT_SAFETY_STOCK_Z_FACTOR,
            max_qty_a_factor: DEFAULT_MAX_QTY_A_FACTOR,
            max_qty_b_factor: DEFAULT_MAX_QTY_B_FACTOR,
            max_qty_c_factor: DEFAULT_MAX_QTY_C_FACTOR,
            is_default: false,
        }
    }

    /// Marks this configuration as the default one.
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Validates threshold ordering and factor signs.
    ///
    /// # Rules
    /// - `0 < abc_a_threshold < abc_b_threshold <= 100`
    /// - `0 < xyz_x_threshold < xyz_y_threshold`
    /// - lead time and every factor finite and non-negative
    ///
    /// # Errors
    /// Returns `AnalysisError::InvalidConfiguration` naming the first offending field.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let numeric = [
            ("abc_a_threshold", self.abc_a_threshold),
            ("abc_b_threshold", self.abc_b_threshold),
            ("xyz_x_threshold", self.xyz_x_threshold),
            ("xyz_y_threshold", self.xyz_y_threshold),
            ("lead_time_weeks", self.lead_time_weeks),
            ("safety_stock_x_factor", self.safety_stock_x_factor),
            ("safety_stock_y_factor", self.safety_stock_y_factor),
            ("safety_stock_z_factor", self.safety_stock_z_factor),
            ("max_qty_a_factor", self.max_qty_a_factor),
            ("max_qty_b_factor", self.max_qty_b_factor),
            ("max_qty_c_factor", self.max_qty_c_factor),
        ];

        for (field, value) in numeric {
            if !value.is_finite() {
                return Err(AnalysisError::invalid_configuration(field, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(AnalysisError::invalid_configuration(field, "must not be negative"));
            }
        }

        if self.abc_a_threshold <= 0.0 {
            return Err(AnalysisError::invalid_configuration(
                "abc_a_threshold",
                "must be greater than 0",
            ));
        }
        if self.abc_b_threshold <= self.abc_a_threshold {
            return Err(AnalysisError::invalid_configuration(
                "abc_b_threshold",
                "must be greater than abc_a_threshold",
            ));
        }
        if self.abc_b_threshold > 100.0 {
            return Err(AnalysisError::invalid_configuration(
                "abc_b_threshold",
                "must not exceed 100",
            ));
        }
        if self.xyz_x_threshold <= 0.0 {
            return Err(AnalysisError::invalid_configuration(
                "xyz_x_threshold",
                "must be greater than 0",
            ));
        }
        if self.xyz_y_threshold <= self.xyz_x_threshold {
            return Err(AnalysisError::invalid_configuration(
                "xyz_y_threshold",
                "must be greater than xyz_x_threshold",
            ));
        }

        Ok(())
    }

    /// Safety stock multiplier for a variability class.
    pub fn safety_stock_factor(&self, xyz_class: XyzClass) -> f64 {
        match xyz_class {
            XyzClass::X => self.safety_stock_x_factor,
            XyzClass::Y => self.safety_stock_y_factor,
            XyzClass::Z => self.safety_stock_z_factor,
        }
    }

    /// Maximum stock multiplier for a value class.
    pub fn max_qty_factor(&self, abc_class: AbcClass) -> f64 {
        match abc_class {
            AbcClass::A => self.max_qty_a_factor,
            AbcClass::B => self.max_qty_b_factor,
            AbcClass::C => self.max_qty_c_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Configuration {
        Configuration::standard(ConfigId::new(1), "Standard")
    }

    fn invalid_field(config: &Configuration) -> String {
        match config.validate() {
            Err(AnalysisError::InvalidConfiguration { field, .. }) => field,
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn standard_configuration_is_valid() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_abc_thresholds() {
        let mut c = config();
        c.abc_a_threshold = 90.0;
        c.abc_b_threshold = 80.0;
        assert_eq!(invalid_field(&c), "abc_b_threshold");
    }

    #[test]
    fn rejects_equal_abc_thresholds() {
        let mut c = config();
        c.abc_b_threshold = c.abc_a_threshold;
        assert_eq!(invalid_field(&c), "abc_b_threshold");
    }

    #[test]
    fn accepts_b_threshold_of_exactly_100() {
        let mut c = config();
        c.abc_b_threshold = 100.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_b_threshold_above_100() {
        let mut c = config();
        c.abc_b_threshold = 100.5;
        assert_eq!(invalid_field(&c), "abc_b_threshold");
    }

    #[test]
    fn rejects_zero_a_threshold() {
        let mut c = config();
        c.abc_a_threshold = 0.0;
        assert_eq!(invalid_field(&c), "abc_a_threshold");
    }

    #[test]
    fn xyz_thresholds_have_no_upper_bound() {
        let mut c = config();
        c.xyz_x_threshold = 150.0;
        c.xyz_y_threshold = 400.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_xyz_thresholds() {
        let mut c = config();
        c.xyz_x_threshold = 50.0;
        c.xyz_y_threshold = 40.0;
        assert_eq!(invalid_field(&c), "xyz_y_threshold");
    }

    #[test]
    fn rejects_negative_factor() {
        let mut c = config();
        c.safety_stock_z_factor = -1.0;
        assert_eq!(invalid_field(&c), "safety_stock_z_factor");
    }

    #[test]
    fn rejects_negative_lead_time() {
        let mut c = config();
        c.lead_time_weeks = -2.0;
        assert_eq!(invalid_field(&c), "lead_time_weeks");
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut c = config();
        c.max_qty_b_factor = f64::INFINITY;
        assert_eq!(invalid_field(&c), "max_qty_b_factor");
    }

    #[test]
    fn factors_map_to_classes() {
        let c = config();
        assert_eq!(c.safety_stock_factor(XyzClass::Y), 1.5);
        assert_eq!(c.max_qty_factor(AbcClass::C), 3.0);
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "config_id": 2,
            "config_name": "Tight",
            "abc_a_threshold": 70.0,
            "abc_b_threshold": 90.0,
            "xyz_x_threshold": 10.0,
            "xyz_y_threshold": 25.0,
            "lead_time_weeks": 1.0,
            "safety_stock_x_factor": 1.0,
            "safety_stock_y_factor": 1.5,
            "safety_stock_z_factor": 2.0,
            "max_qty_a_factor": 1.0,
            "max_qty_b_factor": 1.5,
            "max_qty_c_factor": 2.0
        }"#;
        let c: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(c.config_id, ConfigId::new(2));
        assert!(!c.is_default);
        assert!(c.description.is_none());
    }
}
