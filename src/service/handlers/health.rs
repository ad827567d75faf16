//! Health check endpoint

use axum::{extract::State, response::Json};

use crate::service::{server::AppState, types::HealthResponse};

/// Report liveness and uptime
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = chrono::Utc::now();
    let uptime_seconds = (now - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime_seconds,
    })
}
