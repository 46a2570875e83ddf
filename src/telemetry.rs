//! Tracing subscriber initialization.
//!
//! `RUST_LOG` overrides the configured filter directive.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, ServerConfig};

/// Installs the global subscriber.
///
/// # Example
/// ```no_run
/// use abc_xyz::{config::ServerConfig, telemetry};
/// telemetry::init(&ServerConfig::default());
/// ```
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
