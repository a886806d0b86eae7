//! Weft
//!
//! Public entry point for the weft error model. Subsystems depend on this
//! crate and construct one of the [`WeftError`] kinds when something fails;
//! boundary layers turn those errors into [`ErrorRecord`]s with
//! [`serialize_error`].
//!
//! # Example
//!
//! ```rust
//! use weft::{ErrorKind, WeftError, deserialize_error, serialize_error};
//!
//! let err = WeftError::state("bad state").state_type("session").build();
//! assert_eq!(err.code(), Some("STATE_ERROR"));
//!
//! let record = serialize_error(&err);
//! assert_eq!(record.error_type, "StateError");
//!
//! let restored = deserialize_error(record);
//! assert_eq!(restored.kind(), ErrorKind::State);
//! ```

// Re-export commonly used types from core
pub use weft_core::{
    config::{LoggingConfig, ReportingConfig, WeftConfig},
    error::{
        ErrorCause, ErrorContext, ErrorKind, ErrorRecord, FlattenedCause, OptionExt, ResultExt,
        WeftError, WeftResult, deserialize_error, is_retryable_code, report_dyn_error,
        report_error, serialize_dyn_error, serialize_error,
    },
    logging::init_logging,
};

/// Builders returned by the `WeftError` constructors.
pub mod builders {
    pub use weft_core::error::{
        AgentErrorBuilder, AnalysisErrorBuilder, BaseErrorBuilder, ConfigurationErrorBuilder,
        GraphErrorBuilder, MemoryErrorBuilder, ResourceErrorBuilder, StateErrorBuilder,
        TimeoutErrorBuilder, ValidationErrorBuilder,
    };
}
