//! No-op reporter for when diagnostics delivery is disabled.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::reporting::{ErrorReport, ErrorReporter, ReportError};

/// A reporter that drops every report.
///
/// Used when no webhook is configured. The upstream errors themselves are
/// still logged by the transport; only the operator notification is skipped.
pub struct NullReporter;

impl NullReporter {
    pub fn new() -> Self {
        debug!("Using NullReporter (diagnostics delivery disabled)");
        Self
    }
}

impl Default for NullReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ErrorReporter for NullReporter {
    async fn report(&self, _report: ErrorReport) -> Result<(), ReportError> {
        Ok(())
    }
}
