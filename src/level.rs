//! Severity levels and the emission filter.
//!
//! # Responsibilities
//! - Define the ordered severities (debug < info < warn < error)
//! - Map free-form level names to ranks, case-insensitively
//! - Decide whether a record at a given level is emitted
//!
//! # Design Decisions
//! - Unknown names rank -1 and are never emitted (fail closed)
//! - The always-on name bypasses the threshold and is matched exactly

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseLevelError;

/// Level name used by instrumentation records; never filtered.
pub const ALWAYS_ON: &str = "instrument";

const NAMES: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];

/// Ordered log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Position in the ordering, starting at 0 for `Debug`.
    pub fn rank(self) -> i8 {
        self as i8
    }

    /// Lowercase wire name, as written into records.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match rank(s) {
            0 => Ok(Level::Debug),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Rank of a level name, or -1 if the name is not a known level.
pub fn rank(name: &str) -> i8 {
    NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .map(|i| i as i8)
        .unwrap_or(-1)
}

/// Returns true if a record at `level` passes the `minimum` threshold.
pub fn should_emit(level: &str, minimum: Level) -> bool {
    if level == ALWAYS_ON {
        return true;
    }
    let r = rank(level);
    r >= 0 && r >= minimum.rank()
}
