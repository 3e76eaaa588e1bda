// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::observability::messages::{storage::*, StructuredLog};

use super::{HistoryStore, ReversedText};

/// In-memory history store backed by a write-locked vector.
///
/// Insertion order doubles as creation order, so recency queries read the
/// vector backwards.
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<ReversedText>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn save(
        &self,
        original_text: &str,
        reversed_text: &str,
    ) -> Result<ReversedText, StorageError> {
        let record = ReversedText {
            id: Uuid::new_v4(),
            original_text: original_text.to_string(),
            reversed_text: reversed_text.to_string(),
            created_at: Utc::now(),
        };

        let mut entries = self.entries.write().await;
        entries.push(record.clone());

        ReversalSaved {
            id: record.id,
            original_chars: record.original_text.chars().count(),
            reversed_chars: record.reversed_text.chars().count(),
        }
        .log();

        Ok(record)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ReversedText>, StorageError> {
        let entries = self.entries.read().await;
        let selected: Vec<ReversedText> = entries.iter().rev().take(limit).cloned().collect();

        HistoryQueried {
            requested: limit,
            returned: selected.len(),
        }
        .log();

        Ok(selected)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() == before {
            ReversalNotFound { id }.log();
            return Err(StorageError::NotFound { id });
        }

        ReversalDeleted { id }.log();
        Ok(())
    }
}
