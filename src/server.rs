//! HTTP server initialization and runtime setup.
//!
//! Handles upstream client construction, reporter selection, and Axum server
//! lifecycle.

use crate::application::services::{AlertService, LoginService, SessionService};
use crate::config::Config;
use crate::domain::reporting::ErrorReporter;
use crate::infrastructure::reporting::{NullReporter, WebhookReporter};
use crate::infrastructure::upstream::{HttpTransport, UpstreamSettings};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Diagnostic reporter (webhook or NullReporter fallback)
/// - Forum API transport with its bounded-timeout HTTP client
/// - Exchange services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let reporter: Arc<dyn ErrorReporter> = match &config.report_webhook_url {
        Some(webhook_url) => {
            tracing::info!("Error reporting enabled (webhook)");
            Arc::new(WebhookReporter::new(webhook_url.clone()))
        }
        None => {
            tracing::info!("Error reporting disabled (NullReporter)");
            Arc::new(NullReporter::new())
        }
    };

    let settings = UpstreamSettings {
        base_url: config.api_base_url.clone(),
        api_key: config.api_key.clone(),
        check_environment: config.check_environment,
        check_credentials: config.check_credentials.clone(),
        site_host: config.site_host.clone(),
        timeout: Duration::from_secs(config.upstream_timeout_secs),
    };

    let transport = Arc::new(HttpTransport::new(settings, reporter)?);
    tracing::info!("Forum API transport ready");

    let state = AppState {
        session_service: Arc::new(SessionService::new(transport.clone())),
        login_service: Arc::new(LoginService::new(
            transport.clone(),
            config.return_url.clone(),
        )),
        alert_service: Arc::new(AlertService::new(transport)),
        cookie_prefix: config.cookie_prefix.clone(),
        forum_url: config.forum_url.clone(),
        environment: config.environment_label(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
