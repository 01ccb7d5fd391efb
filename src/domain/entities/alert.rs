//! Forum alert entity and unread summary.

use serde::Deserialize;

/// View timestamp the forum reports for alerts that were never opened.
const NEVER_VIEWED: i64 = 0;

/// A single alert from the forum's alert list.
///
/// Only the fields the bridge inspects are modeled; the rest of the upstream
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub alert_id: u64,

    /// Unix timestamp of when the alert was viewed, 0 if never.
    #[serde(default)]
    pub view_date: i64,
}

impl Alert {
    pub fn is_unread(&self) -> bool {
        self.view_date == NEVER_VIEWED
    }
}

/// Unread-alert count derived for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub unread_count: usize,
}

impl AlertSummary {
    /// Counts the alerts that were never viewed.
    pub fn from_alerts<'a, I>(alerts: I) -> Self
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        Self {
            unread_count: alerts.into_iter().filter(|a| a.is_unread()).count(),
        }
    }
}
