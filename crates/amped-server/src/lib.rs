//! amped-server
//!
//! HTTP front end: a liveness probe, a capability description, and the
//! estimate-to-PDF generation endpoint.

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::HEALTH_PATH, get(routes::health::health_check))
        .route(routes::INFO_PATH, get(routes::info::pdf_info))
        .route(routes::GENERATE_PATH, post(routes::generate::generate))
        .fallback(routes::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::request_log::request_log))
                .layer(cors)
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}
