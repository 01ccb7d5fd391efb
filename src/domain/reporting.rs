//! Diagnostic report model and delivery trait.
//!
//! Whenever the forum API returns a structured error list, the transport
//! assembles an [`ErrorReport`] and hands it to the configured
//! [`ErrorReporter`]. Delivery is fire-and-forget: a failed report is logged
//! and dropped, never surfaced to the request that triggered it.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::reporting::WebhookReporter`] - posts to an operator webhook
//! - [`crate::infrastructure::reporting::NullReporter`] - no-op when reporting is disabled

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::ApiError;

/// Line separating error entries in the report body.
const REPORT_DELIMITER: &str = "-------------------------------------\n";

/// A diagnostic report covering the errors from one upstream call.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    /// "Check" or "Live", from the check-environment flag.
    pub environment: &'static str,
    /// Host of the site that made the failing call.
    pub host: String,
    pub errors: Vec<ApiError>,
}

impl ErrorReport {
    pub fn new(environment: &'static str, host: impl Into<String>, errors: Vec<ApiError>) -> Self {
        Self {
            environment,
            host: host.into(),
            errors,
        }
    }

    /// Subject line tagged with the environment name.
    pub fn subject(&self) -> String {
        format!("XenForo API Error on {}", self.environment)
    }

    /// Report body listing each error's code and message.
    pub fn body(&self) -> String {
        let mut out = format!("Error Report from {}:\n", self.host);

        for error in &self.errors {
            out.push_str(&format!("Code: {}\n", error.code));
            out.push_str(&format!("Message: {}\n", error.message));
            out.push_str(REPORT_DELIMITER);
        }

        out
    }
}

/// Errors that can occur while delivering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report delivery failed: {0}")]
    Delivery(String),

    #[error("report endpoint returned status {0}")]
    Status(u16),
}

/// Delivery channel for diagnostic reports.
///
/// Implementations must not panic; delivery failures are returned as
/// [`ReportError`] and swallowed by the dispatching side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    /// Delivers one report to the operator.
    async fn report(&self, report: ErrorReport) -> Result<(), ReportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_carries_environment() {
        let report = ErrorReport::new("Check", "example.com", vec![]);

        assert_eq!(report.subject(), "XenForo API Error on Check");
    }

    #[test]
    fn test_body_lists_each_error() {
        let report = ErrorReport::new(
            "Live",
            "example.com",
            vec![
                ApiError::new("incorrect_password", "Incorrect password"),
                ApiError::new("invalid_api_key", "API key not valid"),
            ],
        );

        let body = report.body();

        assert!(body.starts_with("Error Report from example.com:\n"));
        assert!(body.contains("Code: incorrect_password\n"));
        assert!(body.contains("Message: Incorrect password\n"));
        assert!(body.contains("Code: invalid_api_key\n"));
        assert_eq!(body.matches(REPORT_DELIMITER).count(), 2);
    }
}
