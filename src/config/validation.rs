// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigValidationError;
use crate::transforms::TransformFactory;

use super::Config;

/// Validate a loaded configuration.
///
/// All findings are collected and returned together so a broken config
/// surfaces every problem in one startup failure instead of one per run.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if !TransformFactory::is_implementation_available(&cfg.transform.default) {
        errors.push(ConfigValidationError::UnknownDefaultTransform {
            requested: cfg.transform.default.clone(),
            available: TransformFactory::list_available_implementations(),
        });
    }

    if cfg.history.get_max_limit() == 0 {
        errors.push(ConfigValidationError::ZeroHistoryLimit);
    } else if cfg.history.get_default_limit() > cfg.history.get_max_limit() {
        errors.push(ConfigValidationError::DefaultLimitExceedsMax {
            default_limit: cfg.history.get_default_limit(),
            max_limit: cfg.history.get_max_limit(),
        });
    }

    if cfg.transform.get_max_input_chars() == 0 {
        errors.push(ConfigValidationError::ZeroInputCap);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
