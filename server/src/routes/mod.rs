//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the RSVP API and the health probe under a single Axum
//! router. Unmatched paths fall through to the static page assets.

pub mod rsvp;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use protocol::{HEALTH_PATH, RSVP_PATH};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// API routes: RSVP create/list and `/healthz`.
fn api_routes(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            RSVP_PATH,
            get(rsvp::list_rsvps)
                .post(rsvp::create_rsvp)
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .route(HEALTH_PATH, get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus static assets, with request tracing and
/// response compression.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let assets = ServeDir::new(&config.static_dir).append_index_html_on_directories(true);

    api_routes(state, config.max_body_bytes)
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
