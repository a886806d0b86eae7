//! Global subscriber installation
//!
//! Kept in its own test binary so the process-wide subscriber set here does
//! not leak into other tests.

use weft_core::config::LoggingConfig;
use weft_core::error::ErrorKind;
use weft_core::logging::init_logging;

#[test]
fn test_init_logging_once() {
    // An invalid format is rejected before anything is installed.
    let bad = LoggingConfig {
        level: "info".to_string(),
        format: "xml".to_string(),
    };
    let err = init_logging(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.context().get_str("config_key"), Some("logging.format"));

    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "compact".to_string(),
    };
    init_logging(&config).expect("first initialisation succeeds");
    tracing::info!("logging initialised");

    let err = init_logging(&LoggingConfig::default()).unwrap_err();
    assert_eq!(err.code(), Some("CONFIG_ERROR"));
    assert_eq!(err.context().get_str("config_key"), Some("logging"));
    assert!(err.cause().is_some());
}
