use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::server::{AppState, now_ms};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/version", get(get_version))
        .layer(CorsLayer::permissive())
}

/// GET /health — liveness only, answers regardless of room state.
async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    tracing::debug!("GET /health");
    Json(json!({
        "status": "ok",
        "time": now_ms(),
        "rooms": state.registry.len(),
        "connections": state.connections.len(),
    }))
}

/// GET /version
async fn get_version() -> Json<Value> {
    tracing::debug!("GET /version");
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "buildTime": option_env!("BUILD_TIME").and_then(|s| s.parse::<u64>().ok()).unwrap_or(0),
        "commit": option_env!("GIT_COMMIT").unwrap_or("unknown"),
    }))
}
