pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::screening::handlers;
use crate::state::AppState;

/// Uploads larger than this are rejected by the HTTP layer before any
/// handler runs.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::show_form).post(handlers::screen_resume))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
