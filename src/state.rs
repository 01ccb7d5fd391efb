//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AlertService, LoginService, SessionService};
use crate::infrastructure::upstream::HttpTransport;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService<HttpTransport>>,
    pub login_service: Arc<LoginService<HttpTransport>>,
    pub alert_service: Arc<AlertService<HttpTransport>>,
    /// Forum cookie prefix; the session cookie read per request is
    /// `<prefix>session`.
    pub cookie_prefix: String,
    /// Base path/URL for forum links in the rendered widget.
    pub forum_url: String,
    /// Environment label reported by the health endpoint.
    pub environment: &'static str,
}
