//! Error types for weft
//!
//! Every failure in weft is a [`WeftError`]: one struct covering ten kinds.
//! Each error carries:
//! - kind: one of [`ErrorKind`], fixed at construction
//! - code: the kind's constant code (free-form only for the base kind)
//! - message: human-readable description
//! - context: structured key/value diagnostics
//! - cause: optional underlying error, shared and never mutated
//!
//! At a process or API boundary an error becomes an [`ErrorRecord`] through
//! [`serialize_error`], and [`deserialize_error`] turns a record back into an
//! error on the other side.

mod builders;
mod context;
mod conversions;
mod ext;
mod kind;
mod record;
mod report;
mod types;

// Re-export all public types and traits
pub use builders::{
    AgentErrorBuilder, AnalysisErrorBuilder, BaseErrorBuilder, ConfigurationErrorBuilder,
    GraphErrorBuilder, MemoryErrorBuilder, ResourceErrorBuilder, StateErrorBuilder,
    TimeoutErrorBuilder, ValidationErrorBuilder,
};
pub use context::ErrorContext;
pub use ext::{OptionExt, ResultExt};
pub use kind::{ErrorKind, is_retryable_code};
pub use record::{
    ErrorRecord, FlattenedCause, deserialize_error, serialize_dyn_error, serialize_error,
};
pub use report::{emit, report_dyn_error, report_error};
pub use types::{ErrorCause, WeftError, WeftResult};
