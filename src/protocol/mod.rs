// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wire contract for transform invocations.
//!
//! Every transform, regardless of how it is dispatched, speaks this
//! request/response contract: a text payload in, an outcome out. An outcome
//! is either the transformed text or a structured error carrying an
//! HTTP-style status code for the caller to map.

use serde::{Deserialize, Serialize};

/// Input handed to a transform: the raw text to operate on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformRequest {
    pub payload: String,
}

/// Result of a transform invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The transformed text.
    Output(String),
    /// The transform could not produce output.
    Error(ErrorDetail),
}

/// Structured failure reported by a transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for ErrorDetail {}
