//! DTOs for the session context endpoint.

use serde::Serialize;

/// Session state for one inbound request, as consumed by a headless embedder.
///
/// This is the same data contract the widget templates render from.
#[derive(Debug, Serialize)]
pub struct SessionContextResponse {
    pub authenticated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub unread_count: usize,
}
