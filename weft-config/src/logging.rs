//! Logging configuration.
//!
//! Controls the default logger's threshold and how the `tracing` backend
//! renders what it receives:
//! - Minimum severity for the default logger
//! - Output format (human readable or JSON)
//! - Optional `EnvFilter` directive for per-target tuning

use serde::{Deserialize, Serialize};
use validator::{self, Validate};
use weft_core::LogLevel;

use crate::validation;

/// Output format of the `tracing` backend.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct LoggingConfig {
    /// Least severe level the default logger emits.
    #[validate(custom(function = validation::validate_minimum_level))]
    #[serde(default)]
    pub minimum_level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directive; derived from `minimum_level` when unset.
    #[validate(custom(function = validation::validate_filter_directive))]
    #[serde(default)]
    pub filter: Option<String>,

    /// Include thread names in every line.
    #[serde(default = "default_true")]
    pub thread_names: bool,

    /// Colourize output.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            minimum_level: LogLevel::INFO,
            format: LogFormat::default(),
            filter: None,
            thread_names: default_true(),
            ansi: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn valid_default_logging_config() {
        let config = LoggingConfig::default();
        config.validate().expect("Default config should be valid");
    }

    #[test]
    fn rejects_too_verbose_level() {
        let config = LoggingConfig {
            minimum_level: LogLevel::verbose(12),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_filter() {
        let config = LoggingConfig {
            filter: Some("weft=debug;".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let config: LoggingConfig = serde_yaml::from_str("format: json\nminimum_level: warning\n").unwrap();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.minimum_level, LogLevel::WARNING);
        assert!(config.thread_names);
        assert!(config.filter.is_none());
    }
}
