//! Runtime error taxonomy
//!
//! Every variant is fatal at the point of detection: the engine wraps it
//! with the offending directive's name and line and aborts the run. The
//! only recoverable condition (a missing script file) is handled in the
//! CLI layer, never here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    /// Both configuration sources supplied on one call
    #[error("need either path or capi_provider, not both")]
    AmbiguousSource,

    /// Neither configuration source supplied
    #[error("need either path or capi_provider")]
    MissingSource,

    /// Provider carries a type tag the resolver does not recognize
    #[error("unknown capi provider: {0}")]
    UnsupportedProvider(String),

    /// Provider object is missing the expected attribute
    #[error("could not find the {0} attribute")]
    AttributeNotFound(String),

    /// Provider attribute exists but has the wrong shape
    #[error("could not read the {0} attribute as a string")]
    InvalidAttributeType(String),

    /// A consumer asked for the run default before any resolution set one
    #[error("no kube_config has been established for this run")]
    NoConfigurationAvailable,

    /// Run default exists but is malformed (internal invariant breach)
    #[error("default kube_config is malformed")]
    InvalidDefaultConfiguration,

    /// Builtin received malformed arguments
    #[error("{builtin}: {reason}")]
    InvalidArguments {
        builtin: &'static str,
        reason: String,
    },

    /// Directive names no registered builtin
    #[error("unknown directive: {0}")]
    UnknownDirective(String),

    /// Argument referenced a binding no earlier directive established
    #[error("undefined reference: {0}")]
    UndefinedReference(String),

    /// External cancellation signal observed between directives
    #[error("run cancelled")]
    Cancelled,

    /// A capture command could not be spawned
    #[error("failed to run command `{cmd}`: {source}")]
    CommandFailed {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper added by the engine so failures name their directive
    #[error("directive {name} (line {line}): {source}")]
    Directive {
        name: String,
        line: usize,
        #[source]
        source: Box<ExecError>,
    },
}

impl ExecError {
    /// Wrap an error with the directive it surfaced from
    pub fn in_directive(self, name: &str, line: usize) -> ExecError {
        ExecError::Directive {
            name: name.to_string(),
            line,
            source: Box::new(self),
        }
    }

    /// Build an InvalidArguments error for a builtin
    pub fn invalid_args(builtin: &'static str, reason: impl Into<String>) -> ExecError {
        ExecError::InvalidArguments {
            builtin,
            reason: reason.into(),
        }
    }
}
