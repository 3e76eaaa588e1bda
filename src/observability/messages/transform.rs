// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for transform execution and dispatch events.
//!
//! This module contains message types for logging events related to:
//! * Transform execution lifecycle (start, completion, failure)
//! * Transform dispatch by name

use std::fmt::{Display, Formatter};

use tracing::Level;

use super::StructuredLog;

/// Transform execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use retrograde::observability::messages::transform::TransformExecutionStarted;
///
/// let msg = TransformExecutionStarted {
///     transform_id: "reverse_words",
///     input_chars: 1024,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct TransformExecutionStarted<'a> {
    pub transform_id: &'a str,
    pub input_chars: usize,
}

impl Display for TransformExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transform '{}' execution started: input={} chars",
            self.transform_id, self.input_chars
        )
    }
}

impl StructuredLog for TransformExecutionStarted<'_> {}

/// Transform execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct TransformExecutionCompleted<'a> {
    pub transform_id: &'a str,
    pub input_chars: usize,
    pub output_chars: usize,
    pub duration: std::time::Duration,
}

impl Display for TransformExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transform '{}' completed: input={} chars, output={} chars, duration={:?}",
            self.transform_id, self.input_chars, self.output_chars, self.duration
        )
    }
}

impl StructuredLog for TransformExecutionCompleted<'_> {}

/// Transform execution failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct TransformExecutionFailed<'a> {
    pub transform_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for TransformExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Transform '{}' execution failed: {}",
            self.transform_id, self.error
        )
    }
}

impl StructuredLog for TransformExecutionFailed<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }
}

/// A caller asked for a transform the registry does not know.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct UnknownTransformRequested<'a> {
    pub requested: &'a str,
    pub available: usize,
}

impl Display for UnknownTransformRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unknown transform '{}' requested ({} registered)",
            self.requested, self.available
        )
    }
}

impl StructuredLog for UnknownTransformRequested<'_> {
    fn level(&self) -> Level {
        Level::WARN
    }
}
