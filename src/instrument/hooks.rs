//! Before/after hooks for host frameworks that drive the handler themselves.

use std::future::Future;

use serde::Serialize;

use crate::error::{LogError, LogResult};
use crate::instrument::Instrumentor;
use crate::logger::Logger;

/// What a hook sees of the current invocation.
#[derive(Debug)]
pub struct InvocationContext<'a, E, R> {
    pub event: &'a E,
    /// Set only for the after hook.
    pub response: Option<&'a R>,
}

impl<'a, E, R> InvocationContext<'a, E, R> {
    pub fn before(event: &'a E) -> Self {
        Self {
            event,
            response: None,
        }
    }

    pub fn after(event: &'a E, response: &'a R) -> Self {
        Self {
            event,
            response: Some(response),
        }
    }
}

/// Hook pair called around a handler by its host.
///
/// There is no error hook. A failing handler never reaches `on_after`, so
/// failures are invisible to implementors of this trait.
pub trait InvocationHooks<E, R> {
    fn on_before(&self, ctx: &InvocationContext<'_, E, R>) -> LogResult<()>;

    fn on_after(&self, ctx: &InvocationContext<'_, E, R>) -> LogResult<()>;
}

/// Hooks writing the same trigger/response records as [`wrap`](super::wrap).
#[derive(Debug, Clone, Default)]
pub struct Middleware {
    instrumentor: Instrumentor,
}

/// Logging hooks backed by `logger`.
pub fn middleware(logger: Logger) -> Middleware {
    Middleware {
        instrumentor: Instrumentor::new(logger),
    }
}

impl<E: Serialize, R: Serialize> InvocationHooks<E, R> for Middleware {
    fn on_before(&self, ctx: &InvocationContext<'_, E, R>) -> LogResult<()> {
        self.instrumentor.trigger(ctx.event)
    }

    fn on_after(&self, ctx: &InvocationContext<'_, E, R>) -> LogResult<()> {
        match ctx.response {
            Some(response) => self.instrumentor.response(response),
            None => self.instrumentor.empty_response(),
        }
    }
}

/// Drive `handler` the way a hook-based host does.
///
/// `on_before` runs first; `on_after` runs only if the handler succeeds.
pub async fn invoke_with_hooks<H, E, R, Err, F, Fut>(
    hooks: &H,
    event: E,
    handler: F,
) -> Result<R, Err>
where
    H: InvocationHooks<E, R>,
    E: Clone,
    F: FnOnce(E) -> Fut,
    Fut: Future<Output = Result<R, Err>>,
    Err: From<LogError>,
{
    hooks.on_before(&InvocationContext::before(&event))?;
    let response = handler(event.clone()).await?;
    hooks.on_after(&InvocationContext::after(&event, &response))?;
    Ok(response)
}
