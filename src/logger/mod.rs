//! Structured JSON logger.
//!
//! # Data Flow
//! ```text
//! debug/info(message, data)
//! warn/error(message, Detail) → detail.rs (merge error info)
//!     → level filter (drop below threshold, unknown names never pass)
//!     → record.rs (one JSON line: message, data, level)
//!     → sink.rs (stdout by default)
//! ```
//!
//! # Design Decisions
//! - Threshold comes from an immutable `LoggerConfig` given at construction
//! - Serialization and write failures are returned, never swallowed
//! - One sink write per emitted record; nothing is buffered

pub mod detail;
pub mod error_data;
pub mod record;
pub mod sink;

use std::fmt;
use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::level::{should_emit, Level};

pub use detail::Detail;
pub use error_data::{merge_error_data, ErrorInfo};
pub use record::{fields_from, Fields, Record};
pub use sink::{MemorySink, Sink, StdoutSink};

/// Level-filtered logger writing one JSON record per call.
#[derive(Clone)]
pub struct Logger {
    config: LoggerConfig,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger writing to standard output.
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Logger writing to the given sink.
    pub fn with_sink(config: LoggerConfig, sink: Arc<dyn Sink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn min_level(&self) -> Level {
        self.config.min_level
    }

    pub fn debug(&self, message: &str, data: impl Into<Option<Fields>>) -> LogResult<()> {
        self.log(Level::Debug.as_str(), message, data.into().as_ref())
    }

    pub fn info(&self, message: &str, data: impl Into<Option<Fields>>) -> LogResult<()> {
        self.log(Level::Info.as_str(), message, data.into().as_ref())
    }

    /// Log a warning with optional data and/or error details.
    ///
    /// Accepts `Fields`, `ErrorInfo`, `&impl Error`, `None`, or a full [`Detail`].
    pub fn warn(&self, message: &str, detail: impl Into<Detail>) -> LogResult<()> {
        self.log(Level::Warn.as_str(), message, detail.into().into_data().as_ref())
    }

    /// Log an error with optional data and/or error details.
    pub fn error(&self, message: &str, detail: impl Into<Detail>) -> LogResult<()> {
        self.log(Level::Error.as_str(), message, detail.into().into_data().as_ref())
    }

    /// Warning with data and error passed as separate arguments.
    pub fn warn_with(
        &self,
        message: &str,
        data: Option<Fields>,
        error: Option<ErrorInfo>,
    ) -> LogResult<()> {
        self.warn(message, Detail::from_parts(data, error))
    }

    /// Error with data and error passed as separate arguments.
    pub fn error_with(
        &self,
        message: &str,
        data: Option<Fields>,
        error: Option<ErrorInfo>,
    ) -> LogResult<()> {
        self.error(message, Detail::from_parts(data, error))
    }

    /// Emit a record at an arbitrary level name.
    ///
    /// The name is written as given. Names that are neither a known level nor
    /// [`ALWAYS_ON`](crate::level::ALWAYS_ON) are dropped.
    pub fn log(&self, level: &str, message: &str, data: Option<&Fields>) -> LogResult<()> {
        if !should_emit(level, self.config.min_level) {
            return Ok(());
        }

        let line = Record {
            message,
            data,
            level,
        }
        .to_line()?;
        self.sink.write_line(&line)?;
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}
