//! Wrapping form as a tower middleware.

use std::task::{Context, Poll};

use futures_util::future::{self, BoxFuture, FutureExt};
use serde::Serialize;
use tower::{Layer, Service};
use tracing::Instrument as _;

use crate::error::LogError;
use crate::instrument::Instrumentor;
use crate::logger::Logger;

/// Layer that adds trigger/response records around an inner service.
#[derive(Debug, Clone, Default)]
pub struct InstrumentLayer {
    instrumentor: Instrumentor,
}

impl InstrumentLayer {
    pub fn new(logger: Logger) -> Self {
        Self {
            instrumentor: Instrumentor::new(logger),
        }
    }
}

impl<S> Layer<S> for InstrumentLayer {
    type Service = InstrumentService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InstrumentService {
            inner,
            instrumentor: self.instrumentor.clone(),
        }
    }
}

/// Service produced by [`InstrumentLayer`].
#[derive(Debug, Clone)]
pub struct InstrumentService<S> {
    inner: S,
    instrumentor: Instrumentor,
}

impl<S> InstrumentService<S> {
    pub fn new(inner: S, logger: Logger) -> Self {
        Self {
            inner,
            instrumentor: Instrumentor::new(logger),
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Req> Service<Req> for InstrumentService<S>
where
    S: Service<Req>,
    S::Future: Send + 'static,
    S::Response: Serialize + Send + 'static,
    S::Error: From<LogError> + Send + 'static,
    Req: Serialize,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        if let Err(err) = self.instrumentor.trigger(&req) {
            return future::ready(Err(<S::Error as From<LogError>>::from(err))).boxed();
        }

        let response = self.inner.call(req);
        let instrumentor = self.instrumentor.clone();

        async move {
            match response.await {
                Ok(response) => {
                    tracing::debug!(outcome = "completed", "Invocation finished");
                    match instrumentor.response(&response) {
                        Ok(()) => Ok(response),
                        Err(err) => Err(<S::Error as From<LogError>>::from(err)),
                    }
                }
                Err(err) => {
                    tracing::debug!(outcome = "failed", "Invocation finished");
                    Err(err)
                }
            }
        }
        .instrument(tracing::debug_span!("invocation"))
        .boxed()
    }
}
