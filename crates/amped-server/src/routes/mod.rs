pub mod generate;
pub mod health;
pub mod info;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "AMPED PDF Generator";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HEALTH_PATH: &str = "/health";
pub const INFO_PATH: &str = "/api/pdf-info";
pub const GENERATE_PATH: &str = "/generate-pdf";

#[derive(Serialize)]
pub struct NotFoundBody {
    pub error: &'static str,
    pub available_endpoints: [&'static str; 3],
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "Endpoint not found",
            available_endpoints: [HEALTH_PATH, GENERATE_PATH, INFO_PATH],
        }),
    )
}
