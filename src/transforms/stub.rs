// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::protocol::{ErrorDetail, Outcome, TransformRequest, TransformResponse};
use crate::traits::Transform;

/// A stub transform implementation for testing and placeholder purposes
pub struct StubTransform {
    pub id: String,
}

impl StubTransform {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Transform for StubTransform {
    async fn apply(&self, _req: TransformRequest) -> TransformResponse {
        // For now, just return an empty success response
        TransformResponse {
            outcome: Outcome::Output(String::new()),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// A transform that always fails for testing failure scenarios
pub struct FailingTransform {
    pub id: String,
}

impl FailingTransform {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

#[async_trait::async_trait]
impl Transform for FailingTransform {
    async fn apply(&self, _req: TransformRequest) -> TransformResponse {
        TransformResponse {
            outcome: Outcome::Error(ErrorDetail {
                code: 500,
                message: format!("Transform '{}' always fails", self.id),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
