//! Weft Core Library
//!
//! This crate provides the error model shared by every weft subsystem: the
//! graph engine, state stores, vector memory, code analyzers and agents all
//! report failures as [`WeftError`] values, which serialize to
//! [`ErrorRecord`]s at API and log boundaries.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{LoggingConfig, ReportingConfig, WeftConfig};
pub use error::{
    ErrorContext, ErrorKind, ErrorRecord, WeftError, WeftResult, deserialize_error,
    report_error, serialize_error,
};
pub use logging::init_logging;
