//! The closed set of error kinds and their fixed codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every error category known to weft.
///
/// `Base` is the generic kind: its code is whatever the caller supplied (or
/// nothing). The other nine kinds each own a fixed machine-readable code that
/// consumers use to dispatch behavior without inspecting the concrete kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Generic error, code chosen by the caller
    #[serde(rename = "BaseError")]
    Base,
    /// State schema or state store failures
    #[serde(rename = "StateError")]
    State,
    /// Agent graph construction or execution failures
    #[serde(rename = "GraphError")]
    Graph,
    /// Invalid or missing configuration
    #[serde(rename = "ConfigurationError")]
    Configuration,
    /// Vector memory store failures
    #[serde(rename = "MemoryError")]
    Memory,
    /// Code analysis and chunking failures
    #[serde(rename = "AnalysisError")]
    Analysis,
    /// Agent execution failures
    #[serde(rename = "AgentError")]
    Agent,
    /// Input validation failures
    #[serde(rename = "ValidationError")]
    Validation,
    /// An operation exceeded its time budget
    #[serde(rename = "TimeoutError")]
    Timeout,
    /// A resource was missing, exhausted or unreachable
    #[serde(rename = "ResourceError")]
    Resource,
}

impl ErrorKind {
    /// All kinds, base first.
    pub const ALL: [ErrorKind; 10] = [
        Self::Base,
        Self::State,
        Self::Graph,
        Self::Configuration,
        Self::Memory,
        Self::Analysis,
        Self::Agent,
        Self::Validation,
        Self::Timeout,
        Self::Resource,
    ];

    /// Fixed code for the kind. `None` for [`ErrorKind::Base`].
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Base => None,
            Self::State => Some("STATE_ERROR"),
            Self::Graph => Some("GRAPH_ERROR"),
            Self::Configuration => Some("CONFIG_ERROR"),
            Self::Memory => Some("MEMORY_ERROR"),
            Self::Analysis => Some("ANALYSIS_ERROR"),
            Self::Agent => Some("AGENT_ERROR"),
            Self::Validation => Some("VALIDATION_ERROR"),
            Self::Timeout => Some("TIMEOUT_ERROR"),
            Self::Resource => Some("RESOURCE_ERROR"),
        }
    }

    /// Name written to the `error_type` field of a record.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Base => "BaseError",
            Self::State => "StateError",
            Self::Graph => "GraphError",
            Self::Configuration => "ConfigurationError",
            Self::Memory => "MemoryError",
            Self::Analysis => "AnalysisError",
            Self::Agent => "AgentError",
            Self::Validation => "ValidationError",
            Self::Timeout => "TimeoutError",
            Self::Resource => "ResourceError",
        }
    }

    /// Look up a kind by its record name. Unknown names yield `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "BaseError" => Some(Self::Base),
            "StateError" => Some(Self::State),
            "GraphError" => Some(Self::Graph),
            "ConfigurationError" => Some(Self::Configuration),
            "MemoryError" => Some(Self::Memory),
            "AnalysisError" => Some(Self::Analysis),
            "AgentError" => Some(Self::Agent),
            "ValidationError" => Some(Self::Validation),
            "TimeoutError" => Some(Self::Timeout),
            "ResourceError" => Some(Self::Resource),
            _ => None,
        }
    }

    /// Look up a specialized kind by its fixed code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.code() == Some(code))
    }

    /// Whether a failure of this kind is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Resource)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Retry classification from a bare code string, for callers that only
/// received a record.
pub fn is_retryable_code(code: &str) -> bool {
    ErrorKind::from_code(code).is_some_and(|kind| kind.is_retryable())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = ErrorKind::ALL.iter().filter_map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 9);
    }

    #[test]
    fn test_type_name_lookup() {
        for kind in ErrorKind::ALL {
            assert_eq!(ErrorKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(ErrorKind::from_type_name("NotARealKind"), None);
        assert_eq!(ErrorKind::from_type_name("stateerror"), None);
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(ErrorKind::from_code("CONFIG_ERROR"), Some(ErrorKind::Configuration));
        assert_eq!(ErrorKind::from_code("TIMEOUT_ERROR"), Some(ErrorKind::Timeout));
        assert_eq!(ErrorKind::from_code("SOMETHING_ELSE"), None);
    }

    #[test]
    fn test_retryable() {
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::Resource.is_retryable());
        assert!(!ErrorKind::Validation.is_retryable());
        assert!(!ErrorKind::Base.is_retryable());

        assert!(is_retryable_code("TIMEOUT_ERROR"));
        assert!(!is_retryable_code("STATE_ERROR"));
        assert!(!is_retryable_code("CUSTOM"));
    }

    #[test]
    fn test_serde_uses_type_names() {
        let json = serde_json::to_string(&ErrorKind::Memory).unwrap();
        assert_eq!(json, "\"MemoryError\"");
        let kind: ErrorKind = serde_json::from_str("\"AgentError\"").unwrap();
        assert_eq!(kind, ErrorKind::Agent);
    }
}
