//! Diagnostic logging setup.
//!
//! # Design Decisions
//! - Uses tracing-subscriber with an `EnvFilter` from `RUST_LOG`
//! - Writes to stderr so stdout carries only JSON records

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "handler_log=warn";

/// Install the global diagnostic subscriber. Later calls are ignored.
pub fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
