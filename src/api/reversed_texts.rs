// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Handlers for the reversal history endpoints.
//!
//! Submission validation lives here, not in the transform: the transform is
//! total and accepts any string, while the API is responsible for rejecting
//! missing, non-string, empty, and oversized input before it runs.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::observability::messages::{
    server::RequestRejected, transform::TransformExecutionFailed, StructuredLog,
};
use crate::protocol::{Outcome, TransformRequest};
use crate::storage::ReversedText;
use crate::traits::Transform;

use super::server::AppState;

/// Body accepted by `POST /api/reversed-texts`.
///
/// `originalText` is kept loose so presence and type are reported as
/// separate validation failures, the way the web client expects.
#[derive(Debug, Deserialize)]
pub struct CreateReversedTextRequest {
    #[serde(rename = "originalText")]
    pub original_text: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CreateReversedTextResponse {
    pub success: bool,
    #[serde(rename = "reversedText")]
    pub reversed_text: String,
    pub data: ReversedText,
}

#[derive(Debug, Serialize)]
pub struct ListReversedTextsResponse {
    pub success: bool,
    pub data: Vec<ReversedText>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteReversedTextResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// POST /api/reversed-texts - reverse the submitted text and persist it
pub async fn create_reversed_text(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateReversedTextRequest>,
) -> Result<Json<CreateReversedTextResponse>, ApiError> {
    let original = match validate_original_text(&body, state.max_input_chars) {
        Ok(text) => text,
        Err(err) => {
            RequestRejected {
                endpoint: "/api/reversed-texts",
                reason: &err.to_string(),
            }
            .log();
            return Err(err);
        }
    };

    let transform = state.registry.default_transform();
    let response = transform
        .apply(TransformRequest {
            payload: original.clone(),
        })
        .await;

    let reversed = match response.outcome {
        Outcome::Output(text) => text,
        Outcome::Error(detail) => {
            TransformExecutionFailed {
                transform_id: transform.name(),
                error: &detail,
            }
            .log();
            return Err(ApiError::Internal(detail.message));
        }
    };

    let record = state.store.save(&original, &reversed).await?;

    Ok(Json(CreateReversedTextResponse {
        success: true,
        reversed_text: record.reversed_text.clone(),
        data: record,
    }))
}

/// GET /api/reversed-texts - fetch recent reversals
pub async fn list_reversed_texts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListReversedTextsResponse>, ApiError> {
    let requested = params.limit.unwrap_or(state.history.get_default_limit());
    let limit = state.history.clamp_limit(requested);

    let records = state.store.recent(limit).await?;
    let count = records.len();

    Ok(Json(ListReversedTextsResponse {
        success: true,
        data: records,
        count,
    }))
}

/// DELETE /api/reversed-texts/{id} - delete a reversal by id
pub async fn delete_reversed_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteReversedTextResponse>, ApiError> {
    let id: Uuid = id
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("'{}' is not a valid reversed text id", id)))?;

    state.store.delete(id).await?;

    Ok(Json(DeleteReversedTextResponse {
        success: true,
        message: "Reversed text deleted successfully".to_string(),
    }))
}

fn validate_original_text(
    body: &CreateReversedTextRequest,
    max_chars: usize,
) -> Result<String, ApiError> {
    let value = body
        .original_text
        .as_ref()
        .ok_or_else(|| ApiError::BadRequest("originalText is required".to_string()))?;

    let text = value
        .as_str()
        .ok_or_else(|| ApiError::BadRequest("originalText must be a string".to_string()))?;

    if text.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "originalText cannot be empty".to_string(),
        ));
    }

    if text.chars().count() > max_chars {
        return Err(ApiError::BadRequest(format!(
            "originalText exceeds the maximum length of {} characters",
            max_chars
        )));
    }

    Ok(text.to_string())
}
