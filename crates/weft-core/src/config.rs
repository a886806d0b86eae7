//! Configuration for logging and error reporting
//!
//! Loaded from TOML. Every section and field is optional; missing values take
//! their defaults. Problems surface as `CONFIG_ERROR` errors naming the
//! offending key and, when loaded from disk, the file.

use crate::error::{WeftError, WeftResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::EnvFilter;

const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `info,weft_core=debug`
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Merge with another logging config. Empty strings do not override.
    pub fn merge(&mut self, other: LoggingConfig) {
        if !other.level.is_empty() {
            self.level = other.level;
        }

        if !other.format.is_empty() {
            self.format = other.format;
        }
    }

    pub fn validate(&self) -> WeftResult<()> {
        if let Err(e) = EnvFilter::try_new(&self.level) {
            return Err(WeftError::configuration(format!(
                "Invalid log filter '{}'",
                self.level
            ))
            .config_key("logging.level")
            .cause(e)
            .build());
        }
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(WeftError::configuration(format!(
                "Unknown log format '{}', expected one of {}",
                self.format,
                LOG_FORMATS.join(", ")
            ))
            .config_key("logging.format")
            .build());
        }
        Ok(())
    }
}

/// How errors are written to the log at an API or process boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Level of the reported event (trace, debug, info, warn, error)
    pub level: String,
    /// Attach the flattened cause to reported events
    pub include_cause: bool,
    /// Attach the context map to reported events
    pub include_context: bool,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            include_cause: true,
            include_context: true,
        }
    }
}

impl ReportingConfig {
    /// Event level, `ERROR` if the configured string is not a level.
    pub fn event_level(&self) -> Level {
        parse_level(&self.level).unwrap_or(Level::ERROR)
    }

    pub fn validate(&self) -> WeftResult<()> {
        match parse_level(&self.level) {
            Some(_) => Ok(()),
            None => Err(WeftError::configuration(format!(
                "Unknown reporting level '{}'",
                self.level
            ))
            .config_key("reporting.level")
            .build()),
        }
    }
}

fn parse_level(level: &str) -> Option<Level> {
    level.trim().parse().ok()
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeftConfig {
    pub logging: LoggingConfig,
    pub reporting: ReportingConfig,
}

impl WeftConfig {
    pub fn from_toml_str(text: &str) -> WeftResult<Self> {
        Self::parse(text, None)
    }

    pub fn from_file(path: impl AsRef<Path>) -> WeftResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            WeftError::configuration(format!("Failed to read config file: {}", e))
                .config_file(path)
                .cause(e)
                .build()
        })?;
        Self::parse(&text, Some(path))
    }

    fn parse(text: &str, source: Option<&Path>) -> WeftResult<Self> {
        let config: WeftConfig = toml::from_str(text).map_err(|e| {
            let mut err = WeftError::configuration(format!("Invalid TOML: {}", e.message()));
            if let Some(path) = source {
                err = err.config_file(path);
            }
            err.cause(e).build()
        })?;
        config.validate().map_err(|e| match source {
            Some(path) => WeftError::configuration(e.message())
                .with_context(e.context().clone())
                .config_file(path)
                .shared_cause(std::sync::Arc::new(e))
                .build(),
            None => e,
        })?;
        Ok(config)
    }

    pub fn validate(&self) -> WeftResult<()> {
        self.logging.validate()?;
        self.reporting.validate()
    }
}
