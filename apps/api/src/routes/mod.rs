pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::pipeline::handlers;
use crate::state::AppState;

/// Multipart bodies carry the 10 MiB resume plus field overhead; the
/// pipeline's own size validation produces the user-facing message for
/// anything between 10 MiB and this transport cap.
const BODY_LIMIT_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/candidates/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/candidates/parse-preview",
            post(handlers::handle_parse_preview),
        )
        .route("/api/v1/candidates/report", post(handlers::handle_report))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
