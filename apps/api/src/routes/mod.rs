pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers::{handle_evaluate, MAX_UPLOAD_BYTES};
use crate::session::handlers::{handle_get_session, handle_reset_session};
use crate::state::AppState;

/// Headroom over the file limit for the role field and multipart framing.
const MAX_BODY_BYTES: usize = MAX_UPLOAD_BYTES + 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/evaluate",
            post(handle_evaluate).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .route("/api/v1/session", get(handle_get_session))
        .route("/api/v1/session/reset", post(handle_reset_session))
        .with_state(state)
}
