//! Transport contract for calls against the forum's REST API.
//!
//! Services depend on the [`ApiTransport`] trait rather than a concrete HTTP
//! client so the upstream can be mocked in unit tests.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::upstream::HttpTransport`] - reqwest-backed client
//! - Test mocks available with `cfg(test)`

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::ApiError;

/// HTTP method for an upstream call. The forum API only needs these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

/// One upstream call, built fresh per request and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Endpoint path relative to the configured API base URL.
    pub endpoint: String,
    pub method: ApiMethod,
    /// Flat key/value payload; sent as a query string on GET and as a
    /// url-encoded body on POST.
    pub params: Vec<(String, String)>,
    /// Forum user the call acts on behalf of, if any.
    pub acting_user: Option<u64>,
}

impl ApiRequest {
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, ApiMethod::Get)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, ApiMethod::Post)
    }

    fn new(endpoint: impl Into<String>, method: ApiMethod) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            params: Vec::new(),
            acting_user: None,
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn acting_as(mut self, user_id: u64) -> Self {
        self.acting_user = Some(user_id);
        self
    }
}

/// Parsed result of one upstream call.
///
/// `errors` is extracted from the body's top-level `errors` field once at
/// parse time and never mutated afterwards; an `errors` field that is present
/// but not a list degrades to the single [`ApiError::undefined`] sentinel.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub body: Value,
    pub errors: Vec<ApiError>,
}

impl ApiResponse {
    /// True when the forum reported at least one structured error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Transport-level failure: the call never produced a usable API response.
///
/// Callers absorb these into their degraded outcomes (guest identity, rejected
/// login, zero alerts); they are never propagated past a service boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("upstream request failed: {0}")]
    Request(String),

    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream response was not valid JSON: {0}")]
    InvalidBody(String),
}

/// Gateway for dispatching one authenticated call to the forum API.
///
/// One attempt per call: no retries, no caching. Implementations attach the
/// API-key header on every call, the acting-user header when
/// [`ApiRequest::acting_user`] is set, and report any parsed upstream errors
/// through the configured [`crate::domain::reporting::ErrorReporter`] without
/// affecting the returned response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Sends the request and parses the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network failure, timeout, or a
    /// non-JSON body.
    async fn invoke(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
