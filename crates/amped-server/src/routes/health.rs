use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::routes::{SERVICE_NAME, SERVICE_VERSION};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Liveness probe.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        timestamp: state.clock.now().timestamp().to_string(),
    })
}
