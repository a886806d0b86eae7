//! Transport records for errors crossing an API or log boundary
//!
//! An [`ErrorRecord`] is the plain shape of an error: kind name, message,
//! optional code, context map and the cause flattened to its rendering.
//! Serializing never fails, and neither does deserializing: unknown kinds
//! degrade to the base kind. The cause only survives as text, so a round trip
//! keeps its rendering but not a live error chain.

use super::context::ErrorContext;
use super::kind::ErrorKind;
use super::types::{ErrorCause, WeftError, WeftResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::sync::Arc;

const UNKNOWN_MESSAGE: &str = "Unknown error";

fn unknown_message() -> String {
    UNKNOWN_MESSAGE.to_string()
}

/// Explicit `null` reads like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_unknown_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|m| m.unwrap_or_else(unknown_message))
}

/// Boundary-safe representation of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Kind name such as `"StateError"`, or the short type name of a foreign
    /// error.
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(default = "unknown_message", deserialize_with = "null_as_unknown_message")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: ErrorContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl ErrorRecord {
    /// Record for an error from outside the weft hierarchy.
    pub fn foreign(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            error_code: None,
            context: ErrorContext::new(),
            cause: None,
        }
    }

    /// Kind named by `error_type`, if it is one of the registered kinds.
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_type_name(&self.error_type)
    }

    /// JSON object with the record's fields. Absent code and cause are left
    /// out.
    pub fn to_json_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("error_type".into(), Value::String(self.error_type.clone()));
        object.insert("message".into(), Value::String(self.message.clone()));
        if let Some(code) = &self.error_code {
            object.insert("error_code".into(), Value::String(code.clone()));
        }
        object.insert("context".into(), self.context.to_json_value());
        if let Some(cause) = &self.cause {
            object.insert("cause".into(), Value::String(cause.clone()));
        }
        Value::Object(object)
    }

    pub fn to_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Parse a record from JSON. Malformed input is a validation error.
    pub fn from_json(json: &str) -> WeftResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Stand-in for a cause that crossed a serialization boundary.
///
/// Only the rendering of the original cause is known, so that is all this
/// error displays.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FlattenedCause(pub String);

impl WeftError {
    /// Plain record of this error.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            error_type: self.kind.type_name().to_string(),
            message: self.message.clone(),
            error_code: self.code().map(str::to_string),
            context: self.context.clone(),
            cause: self.cause_message(),
        }
    }
}

impl From<&WeftError> for ErrorRecord {
    fn from(error: &WeftError) -> Self {
        error.to_record()
    }
}

impl From<ErrorRecord> for WeftError {
    fn from(record: ErrorRecord) -> Self {
        deserialize_error(record)
    }
}

/// Serialize any error value.
///
/// Weft errors produce their own record. Anything else becomes a record named
/// after its type, with its rendering as the message, no code and no context.
pub fn serialize_error<E>(error: &E) -> ErrorRecord
where
    E: StdError + 'static,
{
    let erased: &(dyn StdError + 'static) = error;
    match erased.downcast_ref::<WeftError>() {
        Some(weft) => weft.to_record(),
        None => ErrorRecord::foreign(
            short_type_name(std::any::type_name::<E>()),
            error.to_string(),
        ),
    }
}

/// Serialize a type-erased error. Foreign errors are recorded as `"Error"`
/// since their concrete type is not known here.
pub fn serialize_dyn_error(error: &(dyn StdError + 'static)) -> ErrorRecord {
    match error.downcast_ref::<WeftError>() {
        Some(weft) => weft.to_record(),
        None => ErrorRecord::foreign("Error", error.to_string()),
    }
}

/// Rebuild an error from its record.
///
/// Unregistered kinds fall back to [`ErrorKind::Base`]. The context is taken
/// as-is; named fields are already flattened into it. Specialized kinds keep
/// their fixed code whatever `error_code` says.
pub fn deserialize_error(record: ErrorRecord) -> WeftError {
    let kind = record.kind().unwrap_or(ErrorKind::Base);
    let cause = record
        .cause
        .map(|cause| Arc::new(FlattenedCause(cause)) as ErrorCause);
    WeftError::from_parts(kind, record.message, record.error_code, record.context, cause)
}

/// `std::io::error::Error` -> `Error`, `foo::Wrapper<bar::Baz>` -> `Wrapper`.
fn short_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
