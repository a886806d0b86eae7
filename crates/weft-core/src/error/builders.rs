//! Builders for each error kind
//!
//! Every specialized builder exposes its kind's named optional fields and
//! nothing that could change the code. Fields are merged into the context at
//! `build()` time, only when the caller supplied a value, and after any
//! pass-through context so a named field wins over a same-named context key.

use super::context::ErrorContext;
use super::kind::ErrorKind;
use super::types::{ErrorCause, WeftError};
use serde_json::Value;
use std::error::Error as StdError;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Parts shared by every builder.
#[derive(Default)]
struct Common {
    message: String,
    context: ErrorContext,
    cause: Option<ErrorCause>,
}

impl Common {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Pass-through context and cause setters, identical for every builder.
macro_rules! common_setters {
    () => {
        /// Add one context entry.
        pub fn context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
            self.common.context.insert(key, value);
            self
        }

        /// Merge a whole context map into the pending context.
        pub fn with_context(mut self, context: ErrorContext) -> Self {
            self.common.context.extend(context);
            self
        }

        /// Wrap an underlying error as the cause.
        pub fn cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
            self.common.cause = Some(Arc::new(cause));
            self
        }

        /// Wrap an already shared cause without re-boxing it.
        pub fn shared_cause(mut self, cause: ErrorCause) -> Self {
            self.common.cause = Some(cause);
            self
        }
    };
}

fn path_string(path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().into_owned()
}

/// Builder for [`ErrorKind::Base`] errors, the only kind with a free code.
pub struct BaseErrorBuilder {
    common: Common,
    code: Option<String>,
}

impl BaseErrorBuilder {
    common_setters!();

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            context,
            cause,
        } = self.common;
        WeftError::from_parts(ErrorKind::Base, message, self.code, context, cause)
    }
}

/// Builder for `STATE_ERROR`.
pub struct StateErrorBuilder {
    common: Common,
    state_type: Option<String>,
    state_id: Option<String>,
}

impl StateErrorBuilder {
    common_setters!();

    /// Kind of state involved, e.g. `"session"`.
    pub fn state_type(mut self, state_type: impl Into<String>) -> Self {
        self.state_type = Some(state_type.into());
        self
    }

    pub fn state_id(mut self, state_id: impl Into<String>) -> Self {
        self.state_id = Some(state_id.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("state_type", self.state_type);
        context.insert_str_if_present("state_id", self.state_id);
        WeftError::from_parts(ErrorKind::State, message, None, context, cause)
    }
}

/// Builder for `GRAPH_ERROR`.
pub struct GraphErrorBuilder {
    common: Common,
    graph_id: Option<String>,
    node_id: Option<String>,
}

impl GraphErrorBuilder {
    common_setters!();

    pub fn graph_id(mut self, graph_id: impl Into<String>) -> Self {
        self.graph_id = Some(graph_id.into());
        self
    }

    /// Node that was executing when the failure occurred.
    pub fn node_id(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("graph_id", self.graph_id);
        context.insert_str_if_present("node_id", self.node_id);
        WeftError::from_parts(ErrorKind::Graph, message, None, context, cause)
    }
}

/// Builder for `CONFIG_ERROR`.
pub struct ConfigurationErrorBuilder {
    common: Common,
    config_key: Option<String>,
    config_file: Option<String>,
}

impl ConfigurationErrorBuilder {
    common_setters!();

    /// Dotted key of the offending setting, e.g. `"logging.level"`.
    pub fn config_key(mut self, config_key: impl Into<String>) -> Self {
        self.config_key = Some(config_key.into());
        self
    }

    pub fn config_file(mut self, config_file: impl AsRef<Path>) -> Self {
        self.config_file = Some(path_string(config_file));
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("config_key", self.config_key);
        context.insert_str_if_present("config_file", self.config_file);
        WeftError::from_parts(ErrorKind::Configuration, message, None, context, cause)
    }
}

/// Builder for `MEMORY_ERROR`.
pub struct MemoryErrorBuilder {
    common: Common,
    memory_type: Option<String>,
    collection_name: Option<String>,
}

impl MemoryErrorBuilder {
    common_setters!();

    pub fn memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    pub fn collection_name(mut self, collection_name: impl Into<String>) -> Self {
        self.collection_name = Some(collection_name.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("memory_type", self.memory_type);
        context.insert_str_if_present("collection_name", self.collection_name);
        WeftError::from_parts(ErrorKind::Memory, message, None, context, cause)
    }
}

/// Builder for `ANALYSIS_ERROR`.
pub struct AnalysisErrorBuilder {
    common: Common,
    file_path: Option<String>,
    language: Option<String>,
}

impl AnalysisErrorBuilder {
    common_setters!();

    pub fn file_path(mut self, file_path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path_string(file_path));
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("file_path", self.file_path);
        context.insert_str_if_present("language", self.language);
        WeftError::from_parts(ErrorKind::Analysis, message, None, context, cause)
    }
}

/// Builder for `AGENT_ERROR`.
pub struct AgentErrorBuilder {
    common: Common,
    agent_name: Option<String>,
    agent_type: Option<String>,
}

impl AgentErrorBuilder {
    common_setters!();

    pub fn agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn agent_type(mut self, agent_type: impl Into<String>) -> Self {
        self.agent_type = Some(agent_type.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("agent_name", self.agent_name);
        context.insert_str_if_present("agent_type", self.agent_type);
        WeftError::from_parts(ErrorKind::Agent, message, None, context, cause)
    }
}

/// Builder for `VALIDATION_ERROR`.
pub struct ValidationErrorBuilder {
    common: Common,
    field_name: Option<String>,
    validation_type: Option<String>,
}

impl ValidationErrorBuilder {
    common_setters!();

    pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    /// Which check failed, e.g. `"required"` or `"json"`.
    pub fn validation_type(mut self, validation_type: impl Into<String>) -> Self {
        self.validation_type = Some(validation_type.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("field_name", self.field_name);
        context.insert_str_if_present("validation_type", self.validation_type);
        WeftError::from_parts(ErrorKind::Validation, message, None, context, cause)
    }
}

/// Builder for `TIMEOUT_ERROR`.
pub struct TimeoutErrorBuilder {
    common: Common,
    timeout_duration: Option<Duration>,
    operation: Option<String>,
}

impl TimeoutErrorBuilder {
    common_setters!();

    /// Budget that was exceeded. Stored in the context as float seconds.
    pub fn timeout_duration(mut self, timeout_duration: Duration) -> Self {
        self.timeout_duration = Some(timeout_duration);
        self
    }

    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_duration_if_present("timeout_duration", self.timeout_duration);
        context.insert_str_if_present("operation", self.operation);
        WeftError::from_parts(ErrorKind::Timeout, message, None, context, cause)
    }
}

/// Builder for `RESOURCE_ERROR`.
pub struct ResourceErrorBuilder {
    common: Common,
    resource_type: Option<String>,
    resource_id: Option<String>,
}

impl ResourceErrorBuilder {
    common_setters!();

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn build(self) -> WeftError {
        let Common {
            message,
            mut context,
            cause,
        } = self.common;
        context.insert_str_if_present("resource_type", self.resource_type);
        context.insert_str_if_present("resource_id", self.resource_id);
        WeftError::from_parts(ErrorKind::Resource, message, None, context, cause)
    }
}

impl WeftError {
    /// Start a generic error. The code is optional and caller-chosen.
    pub fn base(message: impl Into<String>) -> BaseErrorBuilder {
        BaseErrorBuilder {
            common: Common::new(message),
            code: None,
        }
    }

    pub fn state(message: impl Into<String>) -> StateErrorBuilder {
        StateErrorBuilder {
            common: Common::new(message),
            state_type: None,
            state_id: None,
        }
    }

    pub fn graph(message: impl Into<String>) -> GraphErrorBuilder {
        GraphErrorBuilder {
            common: Common::new(message),
            graph_id: None,
            node_id: None,
        }
    }

    pub fn configuration(message: impl Into<String>) -> ConfigurationErrorBuilder {
        ConfigurationErrorBuilder {
            common: Common::new(message),
            config_key: None,
            config_file: None,
        }
    }

    pub fn memory(message: impl Into<String>) -> MemoryErrorBuilder {
        MemoryErrorBuilder {
            common: Common::new(message),
            memory_type: None,
            collection_name: None,
        }
    }

    pub fn analysis(message: impl Into<String>) -> AnalysisErrorBuilder {
        AnalysisErrorBuilder {
            common: Common::new(message),
            file_path: None,
            language: None,
        }
    }

    pub fn agent(message: impl Into<String>) -> AgentErrorBuilder {
        AgentErrorBuilder {
            common: Common::new(message),
            agent_name: None,
            agent_type: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder {
            common: Common::new(message),
            field_name: None,
            validation_type: None,
        }
    }

    pub fn timeout(message: impl Into<String>) -> TimeoutErrorBuilder {
        TimeoutErrorBuilder {
            common: Common::new(message),
            timeout_duration: None,
            operation: None,
        }
    }

    pub fn resource(message: impl Into<String>) -> ResourceErrorBuilder {
        ResourceErrorBuilder {
            common: Common::new(message),
            resource_type: None,
            resource_id: None,
        }
    }

    /// Plain error of any kind with no named fields.
    ///
    /// `code` is only honoured for [`ErrorKind::Base`]; specialized kinds keep
    /// their fixed code regardless.
    pub fn of_kind(
        kind: ErrorKind,
        message: impl Into<String>,
        code: Option<String>,
        context: ErrorContext,
    ) -> Self {
        WeftError::from_parts(kind, message.into(), code, context, None)
    }
}
