//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Immutable settings for a [`Logger`](crate::logger::Logger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are dropped. Instrumentation records ignore it.
    pub min_level: Level,
}

impl LoggerConfig {
    /// Config with an explicit threshold.
    pub fn with_min_level(min_level: Level) -> Self {
        Self { min_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, Level::Info);
    }

    #[test]
    fn test_config_serde() {
        let config: LoggerConfig = serde_json::from_str(r#"{"min_level":"WARN"}"#).unwrap();
        assert_eq!(config.min_level, Level::Warn);

        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }
}
