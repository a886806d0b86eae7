//! Global tracing subscriber setup

use crate::config::LoggingConfig;
use crate::error::{WeftError, WeftResult};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this twice returns
/// a `CONFIG_ERROR` rather than panicking.
pub fn init_logging(config: &LoggingConfig) -> WeftResult<()> {
    config.validate()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            WeftError::configuration(format!("Invalid log filter '{}'", config.level))
                .config_key("logging.level")
                .cause(e)
                .build()
        })?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| {
        WeftError::configuration("Logging is already initialised")
            .config_key("logging")
            .shared_cause(Arc::from(e))
            .build()
    })
}
