//! Wrapping form for closure handlers.

use std::future::Future;

use serde::Serialize;
use tracing::Instrument as _;

use crate::error::LogError;
use crate::instrument::Instrumentor;
use crate::logger::Logger;

/// Wrap `handler` so every invocation writes trigger and response records.
pub fn wrap<F>(logger: Logger, handler: F) -> Wrapped<F> {
    Wrapped {
        instrumentor: Instrumentor::new(logger),
        handler,
    }
}

/// A handler wrapped with invocation logging.
///
/// Called exactly like the handler it wraps: `(event, context)`.
#[derive(Debug, Clone)]
pub struct Wrapped<F> {
    instrumentor: Instrumentor,
    handler: F,
}

impl<F> Wrapped<F> {
    pub fn instrumentor(&self) -> &Instrumentor {
        &self.instrumentor
    }

    /// The handler without instrumentation.
    pub fn into_inner(self) -> F {
        self.handler
    }

    /// Run one invocation.
    ///
    /// The trigger record is written before the handler runs. On success the
    /// response record is written and the value returned unchanged; on failure
    /// the handler's error is returned as is and no response record is written.
    pub async fn call<E, C, R, Err, Fut>(&self, event: E, context: C) -> Result<R, Err>
    where
        F: Fn(E, C) -> Fut,
        Fut: Future<Output = Result<R, Err>>,
        E: Serialize,
        R: Serialize,
        Err: From<LogError>,
    {
        self.run(event, context)
            .instrument(tracing::debug_span!("invocation"))
            .await
    }

    async fn run<E, C, R, Err, Fut>(&self, event: E, context: C) -> Result<R, Err>
    where
        F: Fn(E, C) -> Fut,
        Fut: Future<Output = Result<R, Err>>,
        E: Serialize,
        R: Serialize,
        Err: From<LogError>,
    {
        self.instrumentor.trigger(&event)?;

        match (self.handler)(event, context).await {
            Ok(response) => {
                tracing::debug!(outcome = "completed", "Invocation finished");
                self.instrumentor.response(&response)?;
                Ok(response)
            }
            Err(err) => {
                tracing::debug!(outcome = "failed", "Invocation finished");
                Err(err)
            }
        }
    }
}
