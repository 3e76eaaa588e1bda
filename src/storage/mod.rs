// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reversal history: the record type and the storage seam.

mod memory;

pub use memory::MemoryHistoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::StorageError;

/// A persisted reversal: the submitted text paired with its transform
/// output, stamped with an identifier and creation time at save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReversedText {
    pub id: Uuid,
    pub original_text: String,
    pub reversed_text: String,
    pub created_at: DateTime<Utc>,
}

/// Storage seam for the reversal history.
///
/// The in-memory backend is the only production implementation; the trait is
/// where a database-backed store would plug in.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist a new reversal, assigning its id and creation timestamp.
    async fn save(
        &self,
        original_text: &str,
        reversed_text: &str,
    ) -> Result<ReversedText, StorageError>;

    /// The most recent reversals, newest first, at most `limit` entries.
    async fn recent(&self, limit: usize) -> Result<Vec<ReversedText>, StorageError>;

    /// Remove a reversal by id.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
