// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! This module contains all message types used throughout the service for
//! diagnostic and operational logging. Each message type implements the
//! `Display` trait to provide consistent, human-readable output while
//! enabling future internationalization, and the [`StructuredLog`] trait to
//! carry its own emission level.
//!
//! # Organization
//!
//! Messages are organized by subsystem to maintain Single Responsibility
//! Principle:
//!
//! * `transform` - Transform execution and dispatch events
//! * `storage` - History store operations
//! * `server` - Configuration and HTTP server lifecycle events
//!
//! # Usage Pattern
//!
//! ```rust
//! use retrograde::observability::messages::transform::TransformExecutionStarted;
//! use retrograde::observability::messages::StructuredLog;
//!
//! let msg = TransformExecutionStarted {
//!     transform_id: "reverse_words",
//!     input_chars: 64,
//! };
//!
//! msg.log();
//! ```

use std::fmt::Display;

use tracing::{debug, error, info, trace, warn, Level, Span};

pub mod server;
pub mod storage;
pub mod transform;

/// Level-aware emission for structured message types.
///
/// Message structs declare the level they should be emitted at; call sites
/// just build the message and call [`StructuredLog::log`]. The default level
/// is `INFO`.
pub trait StructuredLog: Display {
    /// The level this message is emitted at.
    fn level(&self) -> Level {
        Level::INFO
    }

    /// Emit the message through `tracing` at its declared level.
    fn log(&self) {
        let level = self.level();
        if level == Level::ERROR {
            error!("{}", self);
        } else if level == Level::WARN {
            warn!("{}", self);
        } else if level == Level::DEBUG {
            debug!("{}", self);
        } else if level == Level::TRACE {
            trace!("{}", self);
        } else {
            info!("{}", self);
        }
    }

    /// Open a span for the operation this message begins.
    fn span(&self, operation: &str) -> Span {
        tracing::info_span!("operation", op = operation)
    }
}
