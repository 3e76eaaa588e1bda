// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by history store backends.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("reversed text '{id}' not found")]
    NotFound { id: Uuid },
}
