// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Router assembly and the serving loop.

use std::sync::Arc;

use anyhow::Result;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use crate::config::{Config, HistoryConfig};
use crate::observability::messages::{server::ServerListening, StructuredLog};
use crate::storage::HistoryStore;
use crate::transforms::TransformRegistry;

use super::invoke::{invoke_transform, invoke_usage};
use super::responses::ApiResponse;
use super::reversed_texts::{create_reversed_text, delete_reversed_text, list_reversed_texts};

/// Shared state handed to every handler.
pub struct AppState {
    pub store: Arc<dyn HistoryStore>,
    pub registry: TransformRegistry,
    pub history: HistoryConfig,
    pub max_input_chars: usize,
}

impl AppState {
    pub fn from_config(
        cfg: &Config,
        store: Arc<dyn HistoryStore>,
        registry: TransformRegistry,
    ) -> Self {
        Self {
            store,
            registry,
            history: cfg.history.clone(),
            max_input_chars: cfg.transform.get_max_input_chars(),
        }
    }
}

/// Build the service router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/reversed-texts",
            post(create_reversed_text).get(list_reversed_texts),
        )
        .route("/api/reversed-texts/{id}", delete(delete_reversed_text))
        .route("/api/invoke", post(invoke_transform).get(invoke_usage))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve the API until the process exits.
pub async fn serve(cfg: &Config, state: Arc<AppState>) -> Result<()> {
    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    ServerListening {
        addr: listener.local_addr()?,
    }
    .log();

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success("Word reversal service is healthy"))
}
