//! Widget page handler and templates.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};

use crate::domain::entities::{ApiError, ErrorField};
use crate::state::AppState;
use crate::utils::cookies::session_cookie;

/// Template for the login fragment.
///
/// Renders `templates/widget_login.html` with:
/// - The login modal and its trigger button
/// - Per-field error markers and messages from a rejected attempt
#[derive(Template, WebTemplate)]
#[template(path = "widget_login.html")]
pub struct LoginTemplate {
    pub username_error: bool,
    pub password_error: bool,
    pub messages: Vec<String>,
    /// Reopen the modal on load so errors are visible without a click.
    pub show_modal: bool,
    pub forum_url: String,
}

impl LoginTemplate {
    /// The fragment for a guest who has not attempted a login.
    pub fn blank(forum_url: &str) -> Self {
        Self {
            username_error: false,
            password_error: false,
            messages: Vec::new(),
            show_modal: false,
            forum_url: forum_url.to_string(),
        }
    }

    /// The fragment after a rejected attempt, with errors classified onto
    /// their form fields.
    pub fn with_errors(errors: &[ApiError], forum_url: &str) -> Self {
        let mut template = Self::blank(forum_url);
        template.show_modal = true;

        for error in errors {
            match error.field() {
                ErrorField::Username => template.username_error = true,
                ErrorField::Password => template.password_error = true,
                ErrorField::General => {}
            }
            template.messages.push(error.display_message().to_string());
        }

        template
    }
}

/// Template for the welcome fragment.
///
/// Renders `templates/widget_welcome.html` with the account link, username,
/// and unread-alert badge.
#[derive(Template, WebTemplate)]
#[template(path = "widget_welcome.html")]
pub struct WelcomeTemplate {
    pub username: String,
    pub unread_count: usize,
    pub forum_url: String,
}

/// Renders the widget for the current visitor.
///
/// # Endpoint
///
/// `GET /`
///
/// # Flow
///
/// 1. Read the `<prefix>session` cookie (absent cookie means guest, no
///    upstream call)
/// 2. Resolve the token against the forum
/// 3. Authenticated visitors get the welcome fragment with their
///    unread-alert count; everyone else gets the login fragment
pub async fn widget_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = session_cookie(&headers, &state.cookie_prefix);
    let identity = state.session_service.resolve(token.as_deref()).await;

    if identity.authenticated {
        let alerts = state.alert_service.unread_count(&identity).await;

        WelcomeTemplate {
            username: identity.username,
            unread_count: alerts.unread_count,
            forum_url: state.forum_url.clone(),
        }
        .into_response()
    } else {
        LoginTemplate::blank(&state.forum_url).into_response()
    }
}
