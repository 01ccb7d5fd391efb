//! Handler for the session context endpoint.

use axum::{Json, extract::State, http::HeaderMap};

use crate::api::dto::session::SessionContextResponse;
use crate::state::AppState;
use crate::utils::cookies::session_cookie;

/// Resolves the caller's forum session into its rendering context.
///
/// # Endpoint
///
/// `GET /api/session`
///
/// # Flow
///
/// 1. Read the `<prefix>session` cookie (absent cookie means guest, no
///    upstream call)
/// 2. Resolve the token against the forum
/// 3. For authenticated visitors, fetch the unread-alert count
///
/// # Response
///
/// ```json
/// {
///   "authenticated": true,
///   "username": "alice",
///   "unread_count": 2
/// }
/// ```
pub async fn session_context_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionContextResponse> {
    let token = session_cookie(&headers, &state.cookie_prefix);
    let identity = state.session_service.resolve(token.as_deref()).await;

    let unread_count = if identity.authenticated {
        state
            .alert_service
            .unread_count(&identity)
            .await
            .unread_count
    } else {
        0
    };

    Json(SessionContextResponse {
        authenticated: identity.authenticated,
        username: identity.authenticated.then_some(identity.username),
        unread_count,
    })
}
