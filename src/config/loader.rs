// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::config::consts::{
    DEFAULT_HISTORY_LIMIT, DEFAULT_HOST, DEFAULT_MAX_INPUT_CHARS, DEFAULT_PORT, DEFAULT_TRANSFORM,
    MAX_HISTORY_LIMIT,
};
use crate::errors::ConfigError;

/// Main configuration structure for the word reversal service.
///
/// Every section and field is optional; absent values fall back to the
/// built-in defaults in [`crate::config::consts`]. It is typically loaded
/// from a YAML configuration file.
///
/// # Example
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 8080
/// history:
///   default_limit: 10
///   max_limit: 100
/// transform:
///   default: reverse_words
///   max_input_chars: 5000
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub transform: TransformConfig,
}

/// Network bind configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// History query limits.
///
/// # Fields
/// * `default_limit` - Records returned when a query names no limit (optional)
/// * `max_limit` - Hard ceiling for requested limits (optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryConfig {
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

impl HistoryConfig {
    /// Get the default history limit, using the built-in default if not configured.
    pub fn get_default_limit(&self) -> usize {
        self.default_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    /// Get the limit ceiling, using the built-in default if not configured.
    pub fn get_max_limit(&self) -> usize {
        self.max_limit.unwrap_or(MAX_HISTORY_LIMIT)
    }

    /// Clamp a requested history limit to configured bounds.
    ///
    /// Out-of-bounds requests are clamped to the nearest valid value rather
    /// than rejected, so a query can never ask the store for nothing or for
    /// more than the ceiling allows.
    pub fn clamp_limit(&self, requested: usize) -> usize {
        requested.clamp(1, self.get_max_limit())
    }
}

/// Transform selection and request caps.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformConfig {
    /// Implementation applied to submitted text.
    #[serde(default = "default_transform")]
    pub default: String,
    /// Longest accepted submission, in characters.
    pub max_input_chars: Option<usize>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default: default_transform(),
            max_input_chars: None,
        }
    }
}

impl TransformConfig {
    /// Get the input cap, using the built-in default if not configured.
    pub fn get_max_input_chars(&self) -> usize {
        self.max_input_chars.unwrap_or(DEFAULT_MAX_INPUT_CHARS)
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_transform() -> String {
    DEFAULT_TRANSFORM.to_string()
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// This function loads the configuration and runs the validation pass so
/// startup fails with every finding reported at once.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    crate::config::validate_config(&cfg).map_err(ConfigError::Validation)?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9090
history:
  default_limit: 5
  max_limit: 50
transform:
  default: reverse_words
  max_input_chars: 2000
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.history.get_default_limit(), 5);
        assert_eq!(cfg.history.get_max_limit(), 50);
        assert_eq!(cfg.transform.default, "reverse_words");
        assert_eq!(cfg.transform.get_max_input_chars(), 2000);
    }

    #[test]
    fn missing_sections_take_built_in_defaults() {
        let yaml = r#"
server:
  port: 3000
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.server.host, DEFAULT_HOST);
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.history.get_default_limit(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(cfg.history.get_max_limit(), MAX_HISTORY_LIMIT);
        assert_eq!(cfg.transform.default, DEFAULT_TRANSFORM);
        assert_eq!(cfg.transform.get_max_input_chars(), DEFAULT_MAX_INPUT_CHARS);
    }

    #[test]
    fn clamp_limit_respects_bounds() {
        let history = HistoryConfig {
            default_limit: Some(10),
            max_limit: Some(100),
        };

        // Within bounds - no change
        assert_eq!(history.clamp_limit(50), 50);

        // Below minimum - clamped to 1
        assert_eq!(history.clamp_limit(0), 1);

        // Above maximum - clamped to the ceiling
        assert_eq!(history.clamp_limit(1000), 100);

        // Exactly at bounds
        assert_eq!(history.clamp_limit(1), 1);
        assert_eq!(history.clamp_limit(100), 100);
    }

    #[test]
    fn clamp_limit_with_defaults() {
        let history = HistoryConfig::default();

        assert_eq!(history.clamp_limit(50), 50);
        assert_eq!(history.clamp_limit(0), 1);
        assert_eq!(history.clamp_limit(100_000), MAX_HISTORY_LIMIT);
    }

    #[test]
    fn load_and_validate_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.yaml");
        std::fs::write(
            &path,
            r#"
history:
  default_limit: 10
  max_limit: 25
"#,
        )
        .unwrap();

        let cfg = load_and_validate_config(&path).unwrap();
        assert_eq!(cfg.history.get_max_limit(), 25);
    }

    #[test]
    fn load_and_validate_rejects_inconsistent_limits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.yaml");
        std::fs::write(
            &path,
            r#"
history:
  default_limit: 50
  max_limit: 10
"#,
        )
        .unwrap();

        let result = load_and_validate_config(&path);
        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("exceeds history.max_limit"));
    }

    #[test]
    fn load_reports_missing_files() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_reports_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.yaml");
        std::fs::write(&path, "server: [not a mapping").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn sample_config_in_repo_is_valid() {
        let cfg = load_and_validate_config("configs/server.yaml").unwrap();
        assert_eq!(cfg.transform.default, "reverse_words");
    }
}
