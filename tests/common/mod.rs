//! Shared helpers for integration tests.

use std::sync::Arc;

use handler_log::logger::MemorySink;
use handler_log::{Level, Logger, LoggerConfig};
use serde_json::Value;

/// Logger writing into memory at the given threshold.
pub fn memory_logger(min_level: Level) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::with_sink(LoggerConfig::with_min_level(min_level), sink.clone());
    (logger, sink)
}

/// Every captured line, parsed as JSON.
#[allow(dead_code)]
pub fn records(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("record is valid JSON"))
        .collect()
}

/// Captured records carrying the given message.
#[allow(dead_code)]
pub fn with_message(sink: &MemorySink, message: &str) -> Vec<Value> {
    records(sink)
        .into_iter()
        .filter(|r| r["message"] == message)
        .collect()
}
