//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for error reporting.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ReportingConfig {
    /// Enable debug rendering (HTML page / JSON body with error details).
    /// Off by default: production deployments log errors without showing them.
    pub debug: bool,

    /// Editor hint for the debug page (e.g. "vscode", "sublime").
    /// Forwarded to the page renderer unmodified.
    pub editor: Option<String>,

    /// Application name shown in the diagnostic environment table.
    pub application: String,

    /// Options consumed by the log recorder.
    pub log: LogConfig,
}

impl ReportingConfig {
    /// Debug config with sane test/dev defaults.
    pub fn debug_default() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }
}

/// Log recorder options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Severity level for recorded errors.
    pub level: LogLevel,

    /// Channel name attached to every record.
    pub channel: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Error,
            channel: "error".to_string(),
        }
    }
}

/// Severity level for error records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_production_safe() {
        let config = ReportingConfig::default();
        assert!(!config.debug);
        assert!(config.editor.is_none());
        assert_eq!(config.log.level, LogLevel::Error);
        assert_eq!(config.log.channel, "error");
    }

    #[test]
    fn test_level_deserializes_lowercase() {
        let config: LogConfig = toml::from_str("level = \"warn\"").unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.channel, "error"); // untouched default
    }
}
