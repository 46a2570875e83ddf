//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! config file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `ABC_XYZ` prefix and nested values
//! are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use abc_xyz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod analysis;
mod data;
mod error;
mod server;

pub use analysis::AnalysisSettings;
pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an optional configuration file.
pub const CONFIG_FILE_ENV: &str = "ABC_XYZ_CONFIG_FILE";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener and logging settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Seed configuration and read-side limits
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// Transaction data source
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the file named by `ABC_XYZ_CONFIG_FILE`, if set
    /// 3. Reads environment variables with `ABC_XYZ` prefix, overriding the file
    ///
    /// # Environment Variable Format
    ///
    /// - `ABC_XYZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ABC_XYZ__ANALYSIS__ABC_A_THRESHOLD=75` -> `analysis.abc_a_threshold = 75`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or values cannot be
    /// parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        Self::load_from(file.as_deref())
    }

    /// Load configuration from an optional file plus environment variables
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("ABC_XYZ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.analysis.validate()?;
        self.data.validate()?;
        Ok(())
    }
}
