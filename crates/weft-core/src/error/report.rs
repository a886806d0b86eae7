//! Boundary reporting: write an error's record to the log as structured fields

use super::record::{ErrorRecord, serialize_dyn_error, serialize_error};
use crate::config::ReportingConfig;
use std::error::Error as StdError;
use tracing::Level;

/// Log `error` once at the configured level and return the record that was
/// logged, so an API layer can reuse it as its response body.
pub fn report_error<E>(error: &E, config: &ReportingConfig) -> ErrorRecord
where
    E: StdError + 'static,
{
    let record = serialize_error(error);
    emit(&record, config);
    record
}

/// [`report_error`] for type-erased errors.
pub fn report_dyn_error(error: &(dyn StdError + 'static), config: &ReportingConfig) -> ErrorRecord {
    let record = serialize_dyn_error(error);
    emit(&record, config);
    record
}

/// Emit a single tracing event describing `record`.
pub fn emit(record: &ErrorRecord, config: &ReportingConfig) {
    let code = record.error_code.as_deref();
    let context = if config.include_context {
        record.context.to_json_value().to_string()
    } else {
        String::new()
    };
    let cause = if config.include_cause {
        record.cause.as_deref()
    } else {
        None
    };

    macro_rules! emit_at {
        ($level:expr) => {
            tracing::event!(
                $level,
                error_type = %record.error_type,
                error_code = code,
                context = %context,
                cause = cause,
                "{}",
                record.message
            )
        };
    }

    let level = config.event_level();
    if level == Level::TRACE {
        emit_at!(Level::TRACE)
    } else if level == Level::DEBUG {
        emit_at!(Level::DEBUG)
    } else if level == Level::INFO {
        emit_at!(Level::INFO)
    } else if level == Level::WARN {
        emit_at!(Level::WARN)
    } else {
        emit_at!(Level::ERROR)
    }
}
