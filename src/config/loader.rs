//! Configuration loading from the environment.

use std::env;

use crate::config::schema::LoggerConfig;
use crate::error::ConfigError;

/// Environment variable holding the minimum level name.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

impl LoggerConfig {
    /// Load the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load the config through an arbitrary key lookup.
    ///
    /// An unset or blank threshold yields the default (INFO).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = match lookup(LOG_LEVEL_ENV) {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Ok(Self::default()),
        };

        let min_level = raw.trim().parse().map_err(|source| ConfigError::InvalidLevel {
            var: LOG_LEVEL_ENV,
            source,
        })?;

        tracing::debug!(min_level = %min_level, "Logger configuration loaded");
        Ok(Self { min_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, LOG_LEVEL_ENV);
            value.map(str::to_string)
        }
    }

    #[test]
    fn test_missing_defaults_to_info() {
        let config = LoggerConfig::from_lookup(lookup(None)).unwrap();
        assert_eq!(config.min_level, Level::Info);

        let config = LoggerConfig::from_lookup(lookup(Some("  "))).unwrap();
        assert_eq!(config.min_level, Level::Info);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let config = LoggerConfig::from_lookup(lookup(Some("warn"))).unwrap();
        assert_eq!(config.min_level, Level::Warn);

        let config = LoggerConfig::from_lookup(lookup(Some("Error"))).unwrap();
        assert_eq!(config.min_level, Level::Error);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = LoggerConfig::from_lookup(lookup(Some("chatty"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLevel { var: LOG_LEVEL_ENV, .. }));
    }
}
