//! Diagnostic output of the crate itself.
//!
//! # Data Flow
//! ```text
//! library internals (config load, invocation spans)
//!     → tracing macros
//!     → logging.rs subscriber (stderr, EnvFilter)
//!
//! application records
//!     → Logger → stdout (never mixed with diagnostics)
//! ```

pub mod logging;
