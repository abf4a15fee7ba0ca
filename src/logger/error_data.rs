//! Merging error details into record data.

use std::error::Error;

use crate::logger::record::Fields;

pub const ERROR_NAME_KEY: &str = "errorName";
pub const ERROR_MESSAGE_KEY: &str = "errorMessage";
pub const STACK_TRACE_KEY: &str = "stackTrace";

/// Name, message and trace text of an error, as written into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub name: String,
    pub message: String,
    pub stack: String,
}

impl ErrorInfo {
    /// Error info with a trace consisting of the `name: message` line only.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        let name = name.into();
        let message = message.into();
        let stack = format!("{name}: {message}");
        Self { name, message, stack }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = stack.into();
        self
    }

    /// Capture an error value.
    ///
    /// The name is the error's type name without its module path. The trace is
    /// the `name: message` line followed by one `caused by:` line per source.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        Self::named(short_type_name::<E>(), err)
    }

    /// Capture an error value under an explicit name.
    pub fn named<E: Error + ?Sized>(name: impl Into<String>, err: &E) -> Self {
        let mut info = Self::new(name, err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            info.stack.push_str("\n    caused by: ");
            info.stack.push_str(&cause.to_string());
            source = cause.source();
        }
        info
    }
}

impl<E: Error + ?Sized> From<&E> for ErrorInfo {
    fn from(err: &E) -> Self {
        Self::from_error(err)
    }
}

fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    // drop auto-trait bounds such as `+ Send + Sync` on trait objects
    let base = base.split(" + ").next().unwrap_or(base);
    let base = base.trim_start_matches("dyn ");
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Add error details to `data`, returning a new mapping.
///
/// Without an error, `data` comes back as is. The error keys overwrite any
/// existing keys of the same name.
pub fn merge_error_data(data: Option<&Fields>, err: Option<&ErrorInfo>) -> Option<Fields> {
    let Some(err) = err else {
        return data.cloned();
    };

    let mut merged = data.cloned().unwrap_or_default();
    merged.insert(ERROR_NAME_KEY.into(), err.name.clone().into());
    merged.insert(ERROR_MESSAGE_KEY.into(), err.message.clone().into());
    merged.insert(STACK_TRACE_KEY.into(), err.stack.clone().into());
    Some(merged)
}
