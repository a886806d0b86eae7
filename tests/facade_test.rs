//! The facade exposes the whole error model without reaching into weft-core

use serde_json::json;
use weft::{ErrorKind, ErrorRecord, WeftError, deserialize_error, is_retryable_code, serialize_error};

#[test]
fn test_record_from_api_body() {
    let body = json!({
        "error_type": "TimeoutError",
        "message": "graph step exceeded budget",
        "error_code": "TIMEOUT_ERROR",
        "context": {"operation": "run_node", "timeout_duration": 30.0}
    });
    let record: ErrorRecord = serde_json::from_value(body.clone()).unwrap();
    let err = deserialize_error(record);

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(is_retryable_code(err.code().unwrap()));
    assert_eq!(serialize_error(&err).to_json_value(), body);
}

#[test]
fn test_builders_reachable_from_facade() {
    let builder: weft::builders::AnalysisErrorBuilder = WeftError::analysis("chunking failed");
    let err = builder.language("go").build();
    assert_eq!(err.to_string(), r#"[ANALYSIS_ERROR] chunking failed | Context: {"language": "go"}"#);
}
