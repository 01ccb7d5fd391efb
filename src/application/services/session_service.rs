//! Session resolution service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::Identity;
use crate::domain::upstream::{ApiRequest, ApiTransport};

/// Endpoint resolving a forum session id into a user.
const SESSION_LOOKUP_ENDPOINT: &str = "auth/from-session";

/// Service turning an inbound session token into a resolved [`Identity`].
///
/// The token comes from the forum's session cookie and is read once per
/// request; nothing is stored. The forum owns the session lifetime.
pub struct SessionService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> SessionService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Resolves a session token against the forum.
    ///
    /// Without a token (or with an empty one) this returns the guest identity
    /// immediately, making no upstream call. Any transport failure or
    /// malformed payload also degrades to the guest identity; this never
    /// fails.
    pub async fn resolve(&self, session_token: Option<&str>) -> Identity {
        let Some(token) = session_token else {
            return Identity::guest();
        };

        if token.is_empty() {
            return Identity::guest();
        }

        let request = ApiRequest::post(SESSION_LOOKUP_ENDPOINT).param("session_id", token);

        match self.transport.invoke(request).await {
            Ok(response) => identity_from_payload(&response.body),
            Err(e) => {
                tracing::debug!(error = %e, "session lookup failed, treating as guest");
                Identity::guest()
            }
        }
    }
}

/// Reads `user.user_id` / `user.username` out of the session-lookup payload.
///
/// A missing or zero user id means the session did not resolve.
fn identity_from_payload(body: &Value) -> Identity {
    let user = &body["user"];

    match user["user_id"].as_u64() {
        Some(user_id) if user_id != 0 => {
            let username = user["username"].as_str().unwrap_or_default();
            Identity::member(user_id, username)
        }
        _ => Identity::guest(),
    }
}
