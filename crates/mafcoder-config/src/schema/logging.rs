//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level applied to the mafcoder crates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Warn);
    }

    #[test]
    fn level_parses_lowercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.level.as_str(), "debug");
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result: Result<LoggingConfig, _> = toml::from_str(r#"level = "loud""#);
        assert!(result.is_err());
    }
}
