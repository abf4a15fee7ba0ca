//! The serialized log record.

use serde::Serialize;
use serde_json::Value;

use crate::error::{LogError, LogResult};

/// Structured data attached to a record. Keys keep insertion order.
pub type Fields = serde_json::Map<String, Value>;

/// One log entry, serialized as `{"message", "data", "level"}` in that order.
///
/// `data` is left out entirely when absent.
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    pub message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Fields>,
    pub level: &'a str,
}

impl Record<'_> {
    /// Render as a single line of JSON.
    pub fn to_line(&self) -> LogResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Convert any serializable value into record data.
///
/// The value must serialize to a JSON object.
pub fn fields_from<T: Serialize + ?Sized>(value: &T) -> LogResult<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(LogError::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
