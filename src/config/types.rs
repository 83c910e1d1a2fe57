//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_log_filter, reference_requests, reference_stages};
use super::validation::{ValidationError, validate};
use crate::error::BuildError;
use crate::handlers::{Chain, Handler, Role, link_in_order};
use crate::request::Request;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config ({} problem(s)): {}", .0.len(), join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pipeline configuration for the `escalate` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Stages in chain order. The first one is the head.
    #[serde(rename = "stage", default)]
    pub stages: Vec<StageConfig>,
    /// Requests to send through the chain, in order.
    #[serde(rename = "request", default)]
    pub requests: Vec<Request>,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// The built-in scenario: voice assistant, associate, manager, serving
    /// one normal and one high-priority customer.
    pub fn reference() -> Self {
        Self {
            logging: LoggingConfig::default(),
            stages: reference_stages(),
            requests: reference_requests(),
        }
    }

    /// Handlers described by the stage list, in order.
    pub fn handlers(&self) -> Vec<Handler> {
        self.stages.iter().map(StageConfig::to_handler).collect()
    }

    /// Link the configured stages in order.
    pub fn build_chain(&self) -> Result<Chain, BuildError> {
        link_in_order(self.handlers())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// One `[[stage]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageConfig {
    /// Display name used in stage events (e.g., "Voice Assistant").
    pub name: String,
    /// Stage behaviour.
    pub role: Role,
}

impl StageConfig {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn to_handler(&self) -> Handler {
        Handler::new(self.name.clone(), self.role)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[logging]
filter = "debug"
format = "json"

[[stage]]
name = "Bot"
role = "front_line"

[[stage]]
name = "Supervisor"
role = "terminal"

[[request]]
identifier = "Dana"
priority = "high"

[[request]]
identifier = "Eve"
"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = SAMPLE.parse().unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(
            config.stages,
            vec![
                StageConfig::new("Bot", Role::FrontLine),
                StageConfig::new("Supervisor", Role::Terminal),
            ]
        );
        assert_eq!(
            config.requests,
            vec![Request::high("Dana"), Request::normal("Eve")]
        );
        assert_eq!(config.build_chain().unwrap().len(), 2);
    }

    #[test]
    fn test_logging_defaults() {
        let config: Config = r#"
[[stage]]
name = "Manager"
role = "terminal"

[[request]]
identifier = "Bob"
"#
        .parse()
        .unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_unknown_role_is_parse_error() {
        let err = r#"
[[stage]]
name = "Intern"
role = "coffee"
"#
        .parse::<Config>()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_config_is_invalid() {
        let err = "".parse::<Config>().unwrap_err();
        match err {
            ConfigError::Invalid(errors) => {
                assert_eq!(
                    errors,
                    vec![ValidationError::NoStages, ValidationError::NoRequests]
                );
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.stages.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_reference_config() {
        let config = Config::reference();
        let names: Vec<_> = config.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Voice Assistant", "Associate", "Manager"]);
        assert_eq!(config.requests.len(), 2);
        assert!(validate(&config).is_ok());
    }
}
