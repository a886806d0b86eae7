//! Extension traits for turning foreign results into WeftError

use super::kind::ErrorKind;
use super::types::{WeftError, WeftResult};
use std::error::Error as StdError;
use std::sync::Arc;

/// Extension trait for wrapping a foreign error as the cause of a WeftError
pub trait ResultExt<T> {
    /// Wrap the error as the cause of a plain error of `kind`.
    fn context_kind<C: std::fmt::Display>(self, kind: ErrorKind, message: C) -> WeftResult<T>;

    /// Wrap the error using a fully built WeftError, evaluated only on error.
    ///
    /// The original error becomes the cause unless the closure already set
    /// one, in which case the closure's cause is kept.
    fn with_weft_context<F: FnOnce() -> WeftError>(self, f: F) -> WeftResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context_kind<C: std::fmt::Display>(self, kind: ErrorKind, message: C) -> WeftResult<T> {
        self.map_err(|e| {
            WeftError::from_parts(
                kind,
                message.to_string(),
                None,
                Default::default(),
                Some(Arc::new(e)),
            )
        })
    }

    fn with_weft_context<F: FnOnce() -> WeftError>(self, f: F) -> WeftResult<T> {
        self.map_err(|e| {
            let err = f();
            if err.cause.is_some() {
                return err;
            }
            let WeftError {
                kind,
                message,
                custom_code,
                context,
                ..
            } = err;
            WeftError::from_parts(kind, message, custom_code, context, Some(Arc::new(e)))
        })
    }
}

/// Extension trait for turning a missing value into a WeftError
pub trait OptionExt<T> {
    /// Convert `None` into the error built by `f`.
    fn ok_or_weft<F: FnOnce() -> WeftError>(self, f: F) -> WeftResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_weft<F: FnOnce() -> WeftError>(self, f: F) -> WeftResult<T> {
        self.ok_or_else(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_kind_wraps_cause() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("broken pipe"));
        let err = res
            .context_kind(ErrorKind::Memory, "flush failed")
            .unwrap_err();
        assert_eq!(err.code(), Some("MEMORY_ERROR"));
        assert_eq!(err.message(), "flush failed");
        assert_eq!(err.cause_message().as_deref(), Some("broken pipe"));
    }

    #[test]
    fn test_with_weft_context_is_lazy() {
        let ok: Result<u8, std::io::Error> = Ok(1);
        let value = ok
            .with_weft_context(|| panic!("must not be called on success"))
            .unwrap();
        assert_eq!(value, 1);

        let res: Result<u8, std::fmt::Error> = Err(std::fmt::Error);
        let err = res
            .with_weft_context(|| WeftError::analysis("render failed").language("rust").build())
            .unwrap_err();
        assert_eq!(err.context().get_str("language"), Some("rust"));
        assert!(err.cause().is_some());
    }

    #[test]
    fn test_with_weft_context_keeps_closure_cause() {
        let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res
            .with_weft_context(|| {
                WeftError::agent("tool failed")
                    .agent_name("coder")
                    .cause(std::io::Error::other("sandbox killed the process"))
                    .build()
            })
            .unwrap_err();
        assert_eq!(
            err.cause_message().as_deref(),
            Some("sandbox killed the process")
        );
        assert_eq!(err.context().get_str("agent_name"), Some("coder"));
    }

    #[test]
    fn test_with_weft_context_keeps_base_code() {
        let res: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = res
            .with_weft_context(|| WeftError::base("render").code("RENDER").build())
            .unwrap_err();
        assert_eq!(err.code(), Some("RENDER"));
        assert!(err.cause().unwrap().downcast_ref::<std::fmt::Error>().is_some());
    }

    #[test]
    fn test_ok_or_weft() {
        let missing: Option<&str> = None;
        let err = missing
            .ok_or_weft(|| WeftError::graph("unknown node").node_id("n9").build())
            .unwrap_err();
        assert_eq!(err.code(), Some("GRAPH_ERROR"));
        assert_eq!(Some("x").ok_or_weft(|| WeftError::base("no").build()), Ok("x"));
    }
}
