//! From trait implementations wrapping library failures into WeftError

use super::types::{ErrorCause, WeftError};
use std::error::Error as StdError;

impl From<std::io::Error> for WeftError {
    fn from(error: std::io::Error) -> Self {
        let io_kind = format!("{:?}", error.kind());
        Self::resource(error.to_string())
            .resource_type("io")
            .context("io_kind", io_kind)
            .cause(error)
            .build()
    }
}

impl From<serde_json::Error> for WeftError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation(format!("Invalid JSON: {}", error))
            .validation_type("json")
            .context("line", error.line())
            .context("column", error.column())
            .cause(error)
            .build()
    }
}

impl From<toml::de::Error> for WeftError {
    fn from(error: toml::de::Error) -> Self {
        Self::configuration(format!("Invalid TOML: {}", error.message()))
            .cause(error)
            .build()
    }
}

impl From<anyhow::Error> for WeftError {
    fn from(error: anyhow::Error) -> Self {
        let message = error.to_string();
        let cause: Box<dyn StdError + Send + Sync + 'static> = error.into();
        Self::base(message)
            .shared_cause(ErrorCause::from(cause))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WeftError = io.into();
        assert_eq!(err.kind(), ErrorKind::Resource);
        assert_eq!(err.message(), "denied");
        assert_eq!(err.context().get_str("resource_type"), Some("io"));
        assert_eq!(err.context().get_str("io_kind"), Some("PermissionDenied"));
        assert!(err.source().unwrap().downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_from_json_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err: WeftError = parse.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.context().get_str("validation_type"), Some("json"));
        assert_eq!(err.context().get("line"), Some(&json!(2)));
        assert!(err.message().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_from_toml_error() {
        let parse = toml::from_str::<toml::Table>("level = ").unwrap_err();
        let err: WeftError = parse.into();
        assert_eq!(err.code(), Some("CONFIG_ERROR"));
        assert!(err.cause().is_some());
    }

    #[test]
    fn test_from_anyhow_keeps_message_and_cause() {
        let err: WeftError = anyhow::anyhow!("provider returned 500").into();
        assert_eq!(err.kind(), ErrorKind::Base);
        assert_eq!(err.code(), None);
        assert_eq!(err.cause_message().as_deref(), Some("provider returned 500"));
    }
}
