//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while building or writing a log record.
///
/// A filtered-out record is not an error; emission just returns `Ok(())`.
#[derive(Debug, Error)]
pub enum LogError {
    /// The record (or a payload inside it) could not be turned into JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A value meant to become a data mapping serialized to something else.
    #[error("Expected a JSON object for log data, got {0}")]
    NotAnObject(&'static str),

    /// The output sink rejected the write.
    #[error("Sink write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;

/// Severity name that is not one of `debug`, `info`, `warn`, `error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

/// Errors raised while building a [`LoggerConfig`](crate::config::LoggerConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The threshold variable holds something other than a known level.
    #[error("Invalid {var}: {source}")]
    InvalidLevel {
        var: &'static str,
        #[source]
        source: ParseLevelError,
    },
}
