//! Axum route handlers for the session page state.

use axum::{extract::State, Json};
use tracing::info;

use crate::session::SessionView;
use crate::state::AppState;

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.lock_session().view())
}

/// POST /api/v1/session/reset
///
/// "Try another resume" / "Back to main page": always lands on the upload page.
pub async fn handle_reset_session(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.lock_session();
    info!("Resetting session from state '{}'", session.name());
    session.reset();
    Json(session.view())
}
