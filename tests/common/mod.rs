#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use xenbridge::application::services::{AlertService, LoginService, SessionService};
use xenbridge::domain::reporting::{ErrorReport, ErrorReporter, ReportError};
use xenbridge::infrastructure::reporting::NullReporter;
use xenbridge::infrastructure::upstream::{HttpTransport, UpstreamSettings};
use xenbridge::state::AppState;

pub const API_KEY: &str = "test-api-key";
pub const RETURN_URL: &str = "https://www.example.com/";

pub fn test_settings(base_url: &str) -> UpstreamSettings {
    UpstreamSettings {
        base_url: base_url.to_string(),
        api_key: API_KEY.to_string(),
        check_environment: false,
        check_credentials: None,
        site_host: "www.example.com".to_string(),
        timeout: Duration::from_secs(2),
    }
}

pub fn create_test_state(base_url: &str) -> AppState {
    create_test_state_with_reporter(base_url, Arc::new(NullReporter::new()))
}

pub fn create_test_state_with_reporter(
    base_url: &str,
    reporter: Arc<dyn ErrorReporter>,
) -> AppState {
    let transport = Arc::new(HttpTransport::new(test_settings(base_url), reporter).unwrap());

    AppState {
        session_service: Arc::new(SessionService::new(transport.clone())),
        login_service: Arc::new(LoginService::new(transport.clone(), RETURN_URL.to_string())),
        alert_service: Arc::new(AlertService::new(transport)),
        cookie_prefix: "xf_".to_string(),
        forum_url: "/forums".to_string(),
        environment: "Live",
    }
}

/// Reporter double that forwards every report to a channel for assertions.
pub struct RecordingReporter {
    tx: mpsc::UnboundedSender<ErrorReport>,
    fail_delivery: bool,
}

impl RecordingReporter {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<ErrorReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                tx,
                fail_delivery: false,
            }),
            rx,
        )
    }

    /// A reporter that records the report and then fails delivery.
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<ErrorReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Arc::new(Self {
                tx,
                fail_delivery: true,
            }),
            rx,
        )
    }
}

#[async_trait]
impl ErrorReporter for RecordingReporter {
    async fn report(&self, report: ErrorReport) -> Result<(), ReportError> {
        let _ = self.tx.send(report);

        if self.fail_delivery {
            return Err(ReportError::Delivery("synthetic failure".to_string()));
        }

        Ok(())
    }
}

/// Waits for one recorded report, panicking if none arrives in time.
pub async fn expect_report(rx: &mut mpsc::UnboundedReceiver<ErrorReport>) -> ErrorReport {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for error report")
        .expect("reporter channel closed")
}
