//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::schema::ReportingConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// The reporting settings live under their own section of the application
/// config file so other subsystems can share the file.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RootConfig {
    reporting: ReportingConfig,
}

/// Load the `[reporting]` section from a TOML file.
///
/// A file with no `[reporting]` section yields the defaults (debug off,
/// recorder at error level).
pub fn load_config(path: &Path) -> Result<ReportingConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let root: RootConfig = toml::from_str(&content)?;

    validate(&root.reporting)?;

    Ok(root.reporting)
}

fn validate(config: &ReportingConfig) -> Result<(), ConfigError> {
    if config.log.channel.is_empty() {
        return Err(ConfigError::Validation(
            "log.channel must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_section() {
        let path = write_temp(
            "faultline_full.toml",
            r#"
[reporting]
debug = true
editor = "vscode"
application = "billing-api"

[reporting.log]
level = "warn"
channel = "app-errors"
"#,
        );

        let config = load_config(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.editor.as_deref(), Some("vscode"));
        assert_eq!(config.application, "billing-api");
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.log.channel, "app-errors");
    }

    #[test]
    fn test_missing_section_yields_defaults() {
        let path = write_temp("faultline_empty.toml", "[server]\nport = 8080\n");

        let config = load_config(&path).unwrap();
        assert!(!config.debug);
        assert!(config.editor.is_none());
    }

    #[test]
    fn test_empty_channel_rejected() {
        let path = write_temp(
            "faultline_bad_channel.toml",
            "[reporting.log]\nchannel = \"\"\n",
        );

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/faultline.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
