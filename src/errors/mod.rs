// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod api;
mod config;
mod storage;

pub use api::ApiError;
pub use config::{ConfigError, ConfigValidationError};
pub use storage::StorageError;
