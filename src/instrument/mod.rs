//! Invocation instrumentation.
//!
//! # Data Flow
//! ```text
//! invocation(event, context)
//!     → trigger record   {"message":"trigger","data":{"event":..},"level":"instrument"}
//!     → wrapped handler
//!     → Ok(response):  response record {"data":{"response":..}}, value returned unchanged
//!     → Err(e):        no response record, e returned unchanged
//! ```
//!
//! Three shapes share the same records:
//! - wrap.rs: closure handlers `Fn(event, context) -> Future<Result<..>>`
//! - layer.rs: tower `Layer`/`Service`
//! - hooks.rs: before/after hooks for host frameworks that drive the handler
//!
//! # Design Decisions
//! - Instrumentation records use the always-on level and bypass the threshold
//! - Handler errors are never wrapped; log failures convert into the handler's
//!   error type through `From<LogError>`
//! - No retries or timeouts; those belong to the handler and its host

pub mod hooks;
pub mod layer;
pub mod wrap;

use serde::Serialize;

use crate::error::LogResult;
use crate::level::ALWAYS_ON;
use crate::logger::{Fields, Logger};

pub use hooks::{invoke_with_hooks, middleware, InvocationContext, InvocationHooks, Middleware};
pub use layer::{InstrumentLayer, InstrumentService};
pub use wrap::{wrap, Wrapped};

/// Message of the record written before the handler runs.
pub const TRIGGER: &str = "trigger";
/// Message of the record written after the handler succeeds.
pub const RESPONSE: &str = "response";

/// Writes trigger and response records through a [`Logger`].
#[derive(Debug, Clone, Default)]
pub struct Instrumentor {
    logger: Logger,
}

impl Instrumentor {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Record the inbound payload under `data.event`.
    pub fn trigger<E: Serialize + ?Sized>(&self, event: &E) -> LogResult<()> {
        self.emit(TRIGGER, "event", Some(serde_json::to_value(event)?))
    }

    /// Record the handler result under `data.response`.
    pub fn response<R: Serialize + ?Sized>(&self, response: &R) -> LogResult<()> {
        self.emit(RESPONSE, "response", Some(serde_json::to_value(response)?))
    }

    /// Response record for a host that produced no response value.
    ///
    /// The `response` key is left out of the data mapping.
    pub fn empty_response(&self) -> LogResult<()> {
        self.emit(RESPONSE, "response", None)
    }

    fn emit(&self, message: &str, key: &str, value: Option<serde_json::Value>) -> LogResult<()> {
        let mut data = Fields::new();
        if let Some(value) = value {
            data.insert(key.to_string(), value);
        }
        self.logger.log(ALWAYS_ON, message, Some(&data))
    }
}

impl From<Logger> for Instrumentor {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}
