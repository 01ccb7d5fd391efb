//! Webhook-backed diagnostic report delivery.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::reporting::{ErrorReport, ErrorReporter, ReportError};

/// Posts reports as JSON to an operator-configured webhook.
///
/// The payload carries the report's subject line and plain-text body, which
/// fits the inbound-webhook shape of most chat/alerting tools as well as
/// mail-gateway bridges.
pub struct WebhookReporter {
    http: reqwest::Client,
    webhook_url: String,
}

impl WebhookReporter {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl ErrorReporter for WebhookReporter {
    async fn report(&self, report: ErrorReport) -> Result<(), ReportError> {
        let payload = json!({
            "subject": report.subject(),
            "text": report.body(),
        });

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ReportError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ReportError::Status(response.status().as_u16()));
        }

        tracing::debug!("delivered upstream error report");

        Ok(())
    }
}
