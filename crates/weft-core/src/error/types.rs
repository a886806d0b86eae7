//! Core error type for weft

use super::context::ErrorContext;
use super::kind::ErrorKind;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Result type alias for weft operations
pub type WeftResult<T> = Result<T, WeftError>;

/// Shared handle to an underlying error.
///
/// The cause is wrapped, not owned exclusively: clones of an error share it and
/// nothing here ever mutates it.
pub type ErrorCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Main error type for weft.
///
/// One struct covers all ten kinds. The kind decides the code: the nine
/// specialized kinds always report their fixed constant, and only
/// [`ErrorKind::Base`] carries a caller-chosen code. Values are immutable once
/// built; construct them with the builders in this module (for example
/// [`WeftError::state`] or [`WeftError::base`]).
#[derive(Clone)]
pub struct WeftError {
    pub(super) kind: ErrorKind,
    pub(super) message: String,
    /// Only consulted for [`ErrorKind::Base`].
    pub(super) custom_code: Option<String>,
    pub(super) context: ErrorContext,
    pub(super) cause: Option<ErrorCause>,
}

impl WeftError {
    pub(super) fn from_parts(
        kind: ErrorKind,
        message: String,
        custom_code: Option<String>,
        context: ErrorContext,
        cause: Option<ErrorCause>,
    ) -> Self {
        let custom_code = match kind {
            ErrorKind::Base => custom_code.filter(|code| !code.is_empty()),
            _ => None,
        };
        Self {
            kind,
            message,
            custom_code,
            context,
            cause,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable code: the kind's constant, or the caller's code for
    /// the base kind.
    pub fn code(&self) -> Option<&str> {
        self.kind.code().or(self.custom_code.as_deref())
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Shortcut for `self.context().get(key)`.
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    /// Rendering of the cause, as carried across serialization boundaries.
    pub fn cause_message(&self) -> Option<String> {
        self.cause.as_ref().map(|c| c.to_string())
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Renders `[CODE] message | Context: {...}`, dropping the code prefix and the
/// context suffix when they are absent.
impl fmt::Display for WeftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code() {
            write!(f, "[{}] ", code)?;
        }
        f.write_str(&self.message)?;
        if !self.context.is_empty() {
            write!(f, " | Context: {}", self.context)?;
        }
        Ok(())
    }
}

impl fmt::Debug for WeftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeftError")
            .field("kind", &self.kind)
            .field("code", &self.code())
            .field("message", &self.message)
            .field("context", &self.context)
            .field("cause", &self.cause_message())
            .finish()
    }
}

impl StdError for WeftError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c.as_ref() as &(dyn StdError + 'static))
    }
}

/// Structural equality over the observable fields; causes compare by
/// rendering.
impl PartialEq for WeftError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.code() == other.code()
            && self.context == other.context
            && self.cause_message() == other.cause_message()
    }
}
