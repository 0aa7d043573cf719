use thiserror::Error;

/// Errors raised while composing SQL fragments.
///
/// Absent projections and dropped fields are not errors; they surface as
/// `None` or as a missing column.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// The caller handed in something that cannot be compiled, such as an
    /// empty filter tree.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A value was rendered before it was fully configured.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// No adapter exists for the requested SQL dialect.
    #[error("Dialect not implemented: {0}")]
    UnsupportedDialect(String),

    /// Settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ComposeError {
    fn from(err: serde_json::Error) -> Self {
        ComposeError::Config(err.to_string())
    }
}
