//! Widget route configuration.

use crate::state::AppState;
use crate::web::handlers::{login_form_handler, widget_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Widget routes, all public.
///
/// # Endpoints
///
/// - `GET  /`      - Login or welcome fragment depending on session state
/// - `POST /login` - Login form post; redirects on success
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(widget_handler))
        .route("/login", post(login_form_handler))
}
