//! API route definitions.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::ws::ws_handler;

use super::handlers;
use super::state::AppState;

/// Create the application router.
///
/// Unmatched paths fall through to the static asset directory.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    // Tracing layer with request timing
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Any origin may connect; there is no cross-origin credential to protect.
    let cors = CorsLayer::new().allow_origin(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/history", get(handlers::history))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(trace_layer)
        .with_state(state)
}
