//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// The service holds no connections of its own; upstream reachability is only
/// proven per request, so health reports the build and configured environment
/// rather than probing the forum.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "Check" or "Live", from the check-environment flag.
    pub environment: String,
}
