//! Login form handler.

use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::application::services::LoginOutcome;
use crate::state::AppState;
use crate::web::handlers::widget::LoginTemplate;

/// Credential pair posted by the widget's login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Handles the widget's login form post.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Flow
///
/// A successful exchange short-circuits into a redirect to the forum's
/// one-time login URL; further widget handling stops there. A rejected
/// exchange re-renders the login fragment with the forum's errors marked on
/// their form fields.
pub async fn login_form_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let outcome = state
        .login_service
        .attempt(&form.username, &form.password)
        .await;

    match outcome {
        LoginOutcome::Redirect(target) => Redirect::to(&target).into_response(),
        LoginOutcome::Rejected(errors) => {
            LoginTemplate::with_errors(&errors, &state.forum_url).into_response()
        }
    }
}
