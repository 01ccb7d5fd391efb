//! reqwest-backed implementation of the forum API transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header;
use serde_json::Value;

use crate::domain::entities::ApiError;
use crate::domain::reporting::{ErrorReport, ErrorReporter};
use crate::domain::upstream::{ApiMethod, ApiRequest, ApiResponse, ApiTransport, TransportError};

/// API-key header sent on every call.
const API_KEY_HEADER: &str = "XF-Api-Key";
/// Header naming the forum user a call acts on behalf of.
const ACTING_USER_HEADER: &str = "XF-Api-User";

/// Connection settings for the forum API.
#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    /// Base URL of the forum's REST API, e.g. `https://forum.example.com/api`.
    pub base_url: String,
    pub api_key: String,
    /// When true, calls target the check environment and carry its basic-auth
    /// gate; reports are labelled "Check" instead of "Live".
    pub check_environment: bool,
    /// `user:password` for the check environment's basic-auth gate.
    pub check_credentials: Option<String>,
    /// Host named in diagnostic reports as the caller.
    pub site_host: String,
    pub timeout: Duration,
}

/// HTTP client for the forum API.
///
/// One attempt per call with a bounded timeout. POST payloads go out as a
/// url-encoded body, GET payloads as a query string. Any response carrying a
/// structured error list is reported through the injected [`ErrorReporter`]
/// on a detached task so delivery can neither delay nor fail the call.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    /// Pre-encoded `Basic ...` header value, set in the check environment.
    basic_auth: Option<String>,
    environment: &'static str,
    site_host: String,
    timeout: Duration,
    reporter: Arc<dyn ErrorReporter>,
}

impl HttpTransport {
    /// Builds the transport and its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (e.g. no TLS backend available).
    pub fn new(
        settings: UpstreamSettings,
        reporter: Arc<dyn ErrorReporter>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        let basic_auth = if settings.check_environment {
            settings
                .check_credentials
                .as_deref()
                .map(basic_auth_header)
        } else {
            None
        };

        Ok(Self {
            http,
            base_url: settings.base_url,
            api_key: settings.api_key,
            basic_auth,
            environment: if settings.check_environment {
                "Check"
            } else {
                "Live"
            },
            site_host: settings.site_host,
            timeout: settings.timeout,
            reporter,
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Request(error.to_string())
        }
    }

    /// Hands the parsed error list to the reporter on a detached task.
    ///
    /// Delivery failure is logged and swallowed; the call that triggered the
    /// report never observes it.
    fn dispatch_report(&self, errors: &[ApiError]) {
        let report = ErrorReport::new(self.environment, self.site_host.clone(), errors.to_vec());
        let reporter = Arc::clone(&self.reporter);

        tokio::spawn(async move {
            if let Err(e) = reporter.report(report).await {
                tracing::warn!(error = %e, "failed to deliver upstream error report");
            }
        });
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn invoke(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint_url(&request.endpoint);

        let builder = match request.method {
            ApiMethod::Get => self.http.get(&url).query(&request.params),
            ApiMethod::Post => self.http.post(&url).form(&request.params),
        };

        let mut builder = builder.header(API_KEY_HEADER, &self.api_key);

        if let Some(basic) = &self.basic_auth {
            builder = builder.header(header::AUTHORIZATION, basic);
        }

        if let Some(user_id) = request.acting_user {
            builder = builder.header(ACTING_USER_HEADER, user_id.to_string());
        }

        tracing::debug!(endpoint = %request.endpoint, "calling forum API");

        let response = builder.send().await.map_err(|e| self.classify(e))?;

        // The forum returns its structured error payloads with non-2xx
        // statuses; the body is parsed either way, like the success path.
        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::InvalidBody(e.to_string())
            }
        })?;

        let errors = parse_errors(&body);

        if !errors.is_empty() {
            tracing::warn!(
                endpoint = %request.endpoint,
                count = errors.len(),
                "forum API reported errors"
            );
            self.dispatch_report(&errors);
        }

        Ok(ApiResponse { body, errors })
    }
}

/// Encodes `user:password` into an `Authorization: Basic` header value.
fn basic_auth_header(credentials: &str) -> String {
    format!("Basic {}", BASE64.encode(credentials))
}

/// Extracts the top-level `errors` list from a response body.
///
/// An absent or null field means no errors. A present field that is not a
/// list degrades to the single `undefined` sentinel, as does any list entry
/// that is not a well-formed error object.
fn parse_errors(body: &Value) -> Vec<ApiError> {
    match body.get("errors") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone()).unwrap_or_else(|_| ApiError::undefined())
            })
            .collect(),
        Some(_) => vec![ApiError::undefined()],
    }
}
