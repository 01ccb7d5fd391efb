//! Credential exchange service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{ApiError, Credentials};
use crate::domain::upstream::{ApiRequest, ApiTransport};

/// Endpoint exchanging credentials for a user.
const AUTH_ENDPOINT: &str = "auth";
/// Endpoint issuing a one-time login URL for a resolved user.
const LOGIN_TOKEN_ENDPOINT: &str = "auth/login-token";

/// Result of one login attempt.
///
/// A tagged outcome rather than a side effect: the caller decides whether to
/// short-circuit into the redirect or to render the errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Send the visitor to this URL to complete the forum login.
    Redirect(String),
    /// The forum rejected the attempt with one or more structured errors.
    Rejected(Vec<ApiError>),
}

/// Service exchanging submitted credentials for a one-time login redirect.
pub struct LoginService<T: ApiTransport> {
    transport: Arc<T>,
    /// Where the forum sends the visitor after completing the login.
    return_url: String,
}

impl<T: ApiTransport> LoginService<T> {
    pub fn new(transport: Arc<T>, return_url: String) -> Self {
        Self {
            transport,
            return_url,
        }
    }

    /// Attempts a login with raw form input.
    ///
    /// Both fields are sanitized before use. On success the forum's one-time
    /// login URL is returned with the configured return URL appended; on any
    /// failure (upstream rejection, transport failure, malformed payload) the
    /// outcome carries the forum's error list, substituting the single
    /// `undefined` sentinel when that list is absent or malformed.
    pub async fn attempt(&self, raw_username: &str, raw_password: &str) -> LoginOutcome {
        let credentials = Credentials::sanitized(raw_username, raw_password);

        let request = ApiRequest::post(AUTH_ENDPOINT)
            .param("login", credentials.username.clone())
            .param("password", credentials.password.clone());

        let response = match self.transport.invoke(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "credential exchange failed");
                return LoginOutcome::Rejected(vec![ApiError::undefined()]);
            }
        };

        let Some(user_id) = resolved_user_id(&response.body) else {
            return LoginOutcome::Rejected(errors_or_sentinel(response.errors));
        };

        self.exchange_login_token(user_id).await
    }

    /// Issues the second call turning a resolved user id into a redirect
    /// target.
    async fn exchange_login_token(&self, user_id: u64) -> LoginOutcome {
        let request = ApiRequest::post(LOGIN_TOKEN_ENDPOINT).param("user_id", user_id.to_string());

        let response = match self.transport.invoke(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, user_id, "login token exchange failed");
                return LoginOutcome::Rejected(vec![ApiError::undefined()]);
            }
        };

        match response.body["login_url"].as_str() {
            Some(login_url) => LoginOutcome::Redirect(format!(
                "{login_url}&return_url={}",
                urlencoding::encode(&self.return_url)
            )),
            None => LoginOutcome::Rejected(errors_or_sentinel(response.errors)),
        }
    }
}

/// Reads `user.user_id` out of the auth payload.
fn resolved_user_id(body: &Value) -> Option<u64> {
    body["user"]["user_id"].as_u64()
}

fn errors_or_sentinel(errors: Vec<ApiError>) -> Vec<ApiError> {
    if errors.is_empty() {
        vec![ApiError::undefined()]
    } else {
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upstream::{ApiResponse, MockApiTransport, TransportError};
    use serde_json::json;

    const RETURN_URL: &str = "https://www.example.com/?foo=bar";

    fn response(body: Value) -> ApiResponse {
        let errors = match body.get("errors") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).unwrap())
                .collect(),
            _ => Vec::new(),
        };
        ApiResponse { body, errors }
    }

    fn service(transport: MockApiTransport) -> LoginService<MockApiTransport> {
        LoginService::new(Arc::new(transport), RETURN_URL.to_string())
    }

    #[tokio::test]
    async fn test_successful_login_builds_redirect() {
        let mut transport = MockApiTransport::new();

        transport
            .expect_invoke()
            .withf(|request| {
                request.endpoint == AUTH_ENDPOINT
                    && request.params
                        == vec![
                            ("login".to_string(), "alice".to_string()),
                            ("password".to_string(), "hunter2".to_string()),
                        ]
            })
            .times(1)
            .returning(|_| Ok(response(json!({"user": {"user_id": 42}}))));

        transport
            .expect_invoke()
            .withf(|request| {
                request.endpoint == LOGIN_TOKEN_ENDPOINT
                    && request.params == vec![("user_id".to_string(), "42".to_string())]
            })
            .times(1)
            .returning(|_| {
                Ok(response(
                    json!({"login_url": "https://forum.example.com/login/token?t=abc"}),
                ))
            });

        let outcome = service(transport).attempt("alice", "hunter2").await;

        assert_eq!(
            outcome,
            LoginOutcome::Redirect(
                "https://forum.example.com/login/token?t=abc&return_url=https%3A%2F%2Fwww.example.com%2F%3Ffoo%3Dbar"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_inputs_are_sanitized_before_exchange() {
        let mut transport = MockApiTransport::new();

        transport
            .expect_invoke()
            .withf(|request| {
                request.params
                    == vec![
                        ("login".to_string(), "alice".to_string()),
                        ("password".to_string(), "hunter2".to_string()),
                    ]
            })
            .times(1)
            .returning(|_| Ok(response(json!({"errors": []}))));

        let outcome = service(transport).attempt(" <b>alice</b> ", " hunter2 ").await;

        // No user id resolved, empty error list degrades to the sentinel.
        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec![ApiError::undefined()])
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_upstream_errors() {
        let mut transport = MockApiTransport::new();
        transport.expect_invoke().times(1).returning(|_| {
            Ok(response(json!({
                "errors": [{"code": "incorrect_password", "message": "Incorrect password"}]
            })))
        });

        let outcome = service(transport).attempt("alice", "wrong").await;

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec![ApiError::new(
                "incorrect_password",
                "Incorrect password"
            )])
        );
    }

    #[tokio::test]
    async fn test_missing_errors_degrade_to_sentinel() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_invoke()
            .times(1)
            .returning(|_| Ok(response(json!({}))));

        let outcome = service(transport).attempt("alice", "wrong").await;

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec![ApiError::undefined()])
        );
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_sentinel() {
        let mut transport = MockApiTransport::new();
        transport
            .expect_invoke()
            .times(1)
            .returning(|_| Err(TransportError::Request("connection reset".to_string())));

        let outcome = service(transport).attempt("alice", "hunter2").await;

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec![ApiError::undefined()])
        );
    }

    #[tokio::test]
    async fn test_token_response_without_login_url_is_rejected() {
        let mut transport = MockApiTransport::new();

        transport
            .expect_invoke()
            .withf(|request| request.endpoint == AUTH_ENDPOINT)
            .times(1)
            .returning(|_| Ok(response(json!({"user": {"user_id": 42}}))));

        transport
            .expect_invoke()
            .withf(|request| request.endpoint == LOGIN_TOKEN_ENDPOINT)
            .times(1)
            .returning(|_| Ok(response(json!({"unexpected": true}))));

        let outcome = service(transport).attempt("alice", "hunter2").await;

        assert_eq!(
            outcome,
            LoginOutcome::Rejected(vec![ApiError::undefined()])
        );
    }
}
