// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Named-transform invocation endpoint.
//!
//! The web client funnels transform calls through a generic invoke-by-name
//! endpoint rather than binding to a specific implementation. This module
//! dispatches those calls through the transform registry.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::observability::messages::{
    transform::{TransformExecutionFailed, UnknownTransformRequested},
    StructuredLog,
};
use crate::protocol::{Outcome, TransformRequest};
use crate::traits::Transform;

use super::responses::ApiResponse;
use super::server::AppState;

#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    #[serde(rename = "functionName")]
    pub function_name: Option<String>,
    pub payload: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct InvokeResult {
    #[serde(rename = "functionName")]
    pub function_name: String,
    pub output: String,
}

/// POST /api/invoke - apply a named transform to a payload
pub async fn invoke_transform(
    State(state): State<Arc<AppState>>,
    Json(body): Json<InvokeRequest>,
) -> Result<Json<ApiResponse<InvokeResult>>, ApiError> {
    let function_name = body
        .function_name
        .ok_or_else(|| ApiError::BadRequest("Function name is required".to_string()))?;

    let Some(transform) = state.registry.get(&function_name) else {
        UnknownTransformRequested {
            requested: &function_name,
            available: state.registry.len(),
        }
        .log();
        return Err(ApiError::NotFound(format!(
            "Unknown function: '{}'",
            function_name
        )));
    };

    let payload = extract_text_payload(body.payload.as_ref())?;

    let response = transform.apply(TransformRequest { payload }).await;

    match response.outcome {
        Outcome::Output(output) => Ok(Json(ApiResponse::success(InvokeResult {
            function_name,
            output,
        }))),
        Outcome::Error(detail) => {
            TransformExecutionFailed {
                transform_id: transform.name(),
                error: &detail,
            }
            .log();

            if detail.code == 400 {
                Err(ApiError::BadRequest(detail.message))
            } else {
                Err(ApiError::Internal(detail.message))
            }
        }
    }
}

/// GET /api/invoke - usage hint for the POST-only invocation endpoint
pub async fn invoke_usage() -> Json<Value> {
    Json(json!({
        "message": "Use POST to invoke transforms",
        "example": {
            "functionName": "reverse_words",
            "payload": { "text": "Hello world" },
        },
    }))
}

/// Accept either a bare JSON string or an object carrying a `text` field.
fn extract_text_payload(payload: Option<&Value>) -> Result<String, ApiError> {
    match payload {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(Value::Object(fields)) => match fields.get("text") {
            Some(Value::String(text)) => Ok(text.clone()),
            _ => Err(malformed_payload()),
        },
        _ => Err(malformed_payload()),
    }
}

fn malformed_payload() -> ApiError {
    ApiError::BadRequest(
        "payload must be a string or an object with a string 'text' field".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_strings_are_accepted() {
        let payload = json!("don't");
        assert_eq!(extract_text_payload(Some(&payload)).unwrap(), "don't");
    }

    #[test]
    fn text_fields_are_accepted() {
        let payload = json!({ "text": "Hello" });
        assert_eq!(extract_text_payload(Some(&payload)).unwrap(), "Hello");
    }

    #[test]
    fn other_shapes_are_rejected() {
        for payload in [json!(42), json!({ "text": 42 }), json!([1, 2, 3])] {
            assert!(extract_text_payload(Some(&payload)).is_err());
        }
        assert!(extract_text_payload(None).is_err());
    }
}
