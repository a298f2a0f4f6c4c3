// Copyright 2026 Playver Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP REST API for Playver.
//!
//! One lookup endpoint plus a health probe. Each request maps 1:1 to
//! a [`crate::extract::lookup`] call against shared state.

use crate::error::LookupError;
use crate::extract;
use crate::fetch::PlayFetcher;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for request handlers.
///
/// The fetcher owns the pooled HTTP client; there is no other shared
/// mutable state, so concurrent lookups are fully independent.
pub struct AppState {
    pub fetcher: PlayFetcher,
}

/// Build the axum Router with all REST endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/:package_name", get(handle_lookup))
        .layer(cors)
        .with_state(state)
}

/// Start the REST API server on the given port.
pub async fn start(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Look up the published version of a package.
///
/// axum drops this future if the client disconnects, which cancels
/// the in-flight upstream request.
async fn handle_lookup(
    Path(package_name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match extract::lookup(&state.fetcher, &package_name).await {
        Ok(lookup) => Json(lookup).into_response(),
        Err(err) => {
            tracing::warn!(package = %package_name, error = %err, "lookup failed");
            error_response(&err)
        }
    }
}

/// Map the lookup error taxonomy onto HTTP statuses.
///
/// NotFound → 404, ParseFailed → 502 (upstream contract changed),
/// Fetch → 500.
fn error_response(err: &LookupError) -> Response {
    let status = match err {
        LookupError::NotFound => StatusCode::NOT_FOUND,
        LookupError::ParseFailed => StatusCode::BAD_GATEWAY,
        LookupError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
