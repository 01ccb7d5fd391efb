//! Unread-alert lookup service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Alert, AlertSummary, Identity};
use crate::domain::upstream::{ApiRequest, ApiTransport};

/// Endpoint listing the acting user's alerts.
const ALERTS_ENDPOINT: &str = "alerts";

/// Service fetching the unread-alert count for a resolved identity.
pub struct AlertService<T: ApiTransport> {
    transport: Arc<T>,
}

impl<T: ApiTransport> AlertService<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Counts the identity's never-viewed alerts.
    ///
    /// Only called for authenticated identities; an identity without a user
    /// id short-circuits to zero. Transport failures and malformed payloads
    /// also degrade to zero rather than failing the request.
    pub async fn unread_count(&self, identity: &Identity) -> AlertSummary {
        let Some(user_id) = identity.user_id else {
            tracing::debug!("alert lookup skipped for unresolved identity");
            return AlertSummary::default();
        };

        let request = ApiRequest::get(ALERTS_ENDPOINT)
            .param("unread", "true")
            .acting_as(user_id);

        match self.transport.invoke(request).await {
            Ok(response) => summarize(&response.body),
            Err(e) => {
                tracing::debug!(error = %e, user_id, "alert lookup failed");
                AlertSummary::default()
            }
        }
    }
}

/// Parses the alert list and counts unread entries, skipping any entry that
/// does not deserialize.
fn summarize(body: &Value) -> AlertSummary {
    let alerts: Vec<Alert> = match body["alerts"].as_array() {
        Some(items) => items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        None => return AlertSummary::default(),
    };

    AlertSummary::from_alerts(&alerts)
}
