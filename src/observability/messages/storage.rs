// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for history store operations.

use std::fmt::{Display, Formatter};

use tracing::Level;
use uuid::Uuid;

use super::StructuredLog;

/// A reversal record was persisted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReversalSaved {
    pub id: Uuid,
    pub original_chars: usize,
    pub reversed_chars: usize,
}

impl Display for ReversalSaved {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Reversal '{}' saved: original={} chars, reversed={} chars",
            self.id, self.original_chars, self.reversed_chars
        )
    }
}

impl StructuredLog for ReversalSaved {}

/// The reversal history was queried.
///
/// # Log Level
/// `debug!` - Routine read traffic
pub struct HistoryQueried {
    pub requested: usize,
    pub returned: usize,
}

impl Display for HistoryQueried {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "History queried: requested={} returned={}",
            self.requested, self.returned
        )
    }
}

impl StructuredLog for HistoryQueried {
    fn level(&self) -> Level {
        Level::DEBUG
    }
}

/// A reversal record was deleted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ReversalDeleted {
    pub id: Uuid,
}

impl Display for ReversalDeleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reversal '{}' deleted", self.id)
    }
}

impl StructuredLog for ReversalDeleted {}

/// A delete targeted an id the store does not hold.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ReversalNotFound {
    pub id: Uuid,
}

impl Display for ReversalNotFound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reversal '{}' not found", self.id)
    }
}

impl StructuredLog for ReversalNotFound {
    fn level(&self) -> Level {
        Level::WARN
    }
}
