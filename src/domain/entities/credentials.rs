//! Credentials entity for a single login exchange.

use crate::utils::sanitize::sanitize;

/// A sanitized username/password pair.
///
/// Exists only for the duration of one login exchange and is dropped
/// afterwards; nothing in the service stores credentials.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Builds credentials from raw form input, trimming whitespace and
    /// stripping markup from both fields.
    pub fn sanitized(raw_username: &str, raw_password: &str) -> Self {
        Self {
            username: sanitize(raw_username),
            password: sanitize(raw_password),
        }
    }
}

// Keep passwords out of logs and error output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
