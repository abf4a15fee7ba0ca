//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! environment (LOG_LEVEL)
//!     → loader.rs (lookup, blank → default, parse level)
//!     → LoggerConfig (immutable)
//!     → handed to Logger::new, cloned into every Logger copy
//! ```
//!
//! # Design Decisions
//! - Config is a plain value passed to the logger, never read from globals
//! - Loading takes a lookup closure so tests never touch the process environment
//! - Unset or blank threshold means INFO; anything unrecognised is rejected

pub mod loader;
pub mod schema;

pub use loader::LOG_LEVEL_ENV;
pub use schema::LoggerConfig;
