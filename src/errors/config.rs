// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use thiserror::Error;

/// Errors raised while loading the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration validation failed:\n{}", join_findings(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join_findings(findings: &[ConfigValidationError]) -> String {
    findings
        .iter()
        .map(|finding| finding.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Findings produced by the configuration validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// The configured default transform has no registered implementation
    UnknownDefaultTransform {
        /// The name the configuration asked for
        requested: String,
        /// The implementations that are actually registered
        available: Vec<&'static str>,
    },
    /// The history limit ceiling is zero, which would make every query empty
    ZeroHistoryLimit,
    /// The default history limit exceeds the configured ceiling
    DefaultLimitExceedsMax {
        default_limit: usize,
        max_limit: usize,
    },
    /// The input cap is zero, which would reject every submission
    ZeroInputCap,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValidationError::UnknownDefaultTransform {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Default transform '{}' does not exist (available: {})",
                    requested,
                    available.join(", ")
                )
            }
            ConfigValidationError::ZeroHistoryLimit => {
                write!(f, "history.max_limit must be greater than zero")
            }
            ConfigValidationError::DefaultLimitExceedsMax {
                default_limit,
                max_limit,
            } => {
                write!(
                    f,
                    "history.default_limit ({}) exceeds history.max_limit ({})",
                    default_limit, max_limit
                )
            }
            ConfigValidationError::ZeroInputCap => {
                write!(f, "transform.max_input_chars must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}
