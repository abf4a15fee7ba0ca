//! Structured JSON logging and invocation instrumentation for function handlers.
//!
//! ```text
//! LOG_LEVEL ─▶ config ─▶ Logger ─▶ level filter ─▶ record ─▶ stdout
//!                          ▲
//!                          │ trigger / response (always on)
//!               instrument (wrap, tower layer, hooks)
//! ```

pub mod config;
pub mod error;
pub mod instrument;
pub mod level;
pub mod logger;
pub mod observability;

use std::sync::OnceLock;

pub use config::LoggerConfig;
pub use error::{ConfigError, LogError, LogResult};
pub use instrument::{middleware, wrap, InstrumentLayer, InvocationHooks, Middleware, Wrapped};
pub use level::{Level, ALWAYS_ON};
pub use logger::{Detail, ErrorInfo, Fields, Logger};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger, configured from the environment on first use.
///
/// An invalid `LOG_LEVEL` falls back to INFO.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(|| {
        let config = LoggerConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Falling back to default log level");
            LoggerConfig::default()
        });
        Logger::new(config)
    })
}
