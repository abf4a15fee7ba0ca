//! Trigger/response records around handler invocations.

use handler_log::instrument::{invoke_with_hooks, InstrumentLayer};
use handler_log::{middleware, wrap, Level, LogError, ALWAYS_ON};
use serde_json::{json, Value};
use tower::{service_fn, ServiceBuilder, ServiceExt};

mod common;

#[derive(Debug, PartialEq, thiserror::Error)]
enum HandlerError {
    #[error("handler failed: {0}")]
    Failed(String),
    #[error("logging failed")]
    Log,
}

impl From<LogError> for HandlerError {
    fn from(_: LogError) -> Self {
        HandlerError::Log
    }
}

#[tokio::test]
async fn test_wrap_logs_event_then_response() {
    let (logger, sink) = common::memory_logger(Level::Error);
    let handler = wrap(logger, |_event: Value, _ctx: ()| async move {
        Ok::<_, HandlerError>(42)
    });

    let out = handler.call(json!({"a": 1}), ()).await.unwrap();
    assert_eq!(out, 42);

    let records = common::records(&sink);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["message"], "trigger");
    assert_eq!(records[0]["level"], ALWAYS_ON);
    assert_eq!(records[0]["data"]["event"], json!({"a": 1}));
    assert_eq!(records[1]["message"], "response");
    assert_eq!(records[1]["level"], ALWAYS_ON);
    assert_eq!(records[1]["data"]["response"], 42);
}

#[tokio::test]
async fn test_wrap_failure_has_no_response() {
    let (logger, sink) = common::memory_logger(Level::Info);
    let handler = wrap(logger, |_event: Value, _ctx: ()| async move {
        Err::<Value, _>(HandlerError::Failed("db down".into()))
    });

    let err = handler.call(json!({"a": 1}), ()).await.unwrap_err();
    assert_eq!(err, HandlerError::Failed("db down".into()));

    assert_eq!(common::with_message(&sink, "trigger").len(), 1);
    assert!(common::with_message(&sink, "response").is_empty());
}

#[tokio::test]
async fn test_all_forms_write_identical_records() {
    let event = json!({"id": "evt-1"});

    let (logger, wrap_sink) = common::memory_logger(Level::Info);
    wrap(logger, |e: Value, _ctx: ()| async move { Ok::<_, HandlerError>(json!({"seen": e})) })
        .call(event.clone(), ())
        .await
        .unwrap();

    let (logger, layer_sink) = common::memory_logger(Level::Info);
    ServiceBuilder::new()
        .layer(InstrumentLayer::new(logger))
        .service(service_fn(|e: Value| async move {
            Ok::<_, tower::BoxError>(json!({"seen": e}))
        }))
        .oneshot(event.clone())
        .await
        .unwrap();

    let (logger, hook_sink) = common::memory_logger(Level::Info);
    let hooks = middleware(logger);
    invoke_with_hooks(&hooks, event.clone(), |e: Value| async move {
        Ok::<_, HandlerError>(json!({"seen": e}))
    })
    .await
    .unwrap();

    assert_eq!(wrap_sink.lines(), layer_sink.lines());
    assert_eq!(wrap_sink.lines(), hook_sink.lines());
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let (logger, sink) = common::memory_logger(Level::Info);
    let handler = std::sync::Arc::new(wrap(logger, |n: u32, _ctx: ()| async move {
        tokio::task::yield_now().await;
        Ok::<_, HandlerError>(n * 2)
    }));

    let mut tasks = Vec::new();
    for n in 0..8u32 {
        let handler = handler.clone();
        tasks.push(tokio::spawn(async move { handler.call(n, ()).await }));
    }
    for (n, task) in tasks.into_iter().enumerate() {
        assert_eq!(task.await.unwrap().unwrap(), n as u32 * 2);
    }

    assert_eq!(common::with_message(&sink, "trigger").len(), 8);
    assert_eq!(common::with_message(&sink, "response").len(), 8);
}
