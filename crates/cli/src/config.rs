//! Configuration loading from rolegate.toml.

use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output rendering.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Format,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            pretty: default_pretty(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Text,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Create a default configuration.
    pub fn default_config() -> Self {
        Self {
            log_level: default_log_level(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output.format, Format::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_parse_output_section() {
        let toml = r#"
log_level = "access=debug"

[output]
format = "text"
pretty = false
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.log_level, "access=debug");
        assert_eq!(config.output.format, Format::Text);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = Config::parse("[backend]\nmodel = \"x\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
