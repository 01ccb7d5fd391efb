//! API route configuration.

use crate::api::handlers::{login_handler, session_context_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes for headless embedders.
///
/// # Endpoints
///
/// - `GET  /session` - Session context (authenticated, username, unread count)
/// - `POST /login`   - Credential exchange returning a tagged redirect/errors outcome
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(session_context_handler))
        .route("/login", post(login_handler))
}
