//! Structured errors reported by the forum API.

use serde::{Deserialize, Serialize};

/// Error code substituted when the upstream error payload is absent or not a
/// well-formed list.
pub const UNDEFINED_ERROR_CODE: &str = "undefined";

/// Fallback message for error codes the UI does not recognize.
const GENERIC_MESSAGE: &str = "Login failed. Please try again.";

/// Which login form field an error should be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Username,
    Password,
    General,
}

/// One problem reported by the forum API.
///
/// A response may carry zero, one, or many of these. They are parsed once by
/// the transport and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,

    #[serde(default)]
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The sentinel error standing in for a malformed or missing upstream
    /// error payload.
    pub fn undefined() -> Self {
        Self {
            code: UNDEFINED_ERROR_CODE.to_string(),
            message: String::new(),
        }
    }

    /// Classifies the error for per-field rendering in the login form.
    pub fn field(&self) -> ErrorField {
        match self.code.as_str() {
            "incorrect_password" => ErrorField::Password,
            "requested_user_x_not_found" => ErrorField::Username,
            _ => ErrorField::General,
        }
    }

    /// The message to show a visitor, falling back to a generic line when the
    /// upstream message is empty.
    pub fn display_message(&self) -> &str {
        if self.message.is_empty() {
            GENERIC_MESSAGE
        } else {
            &self.message
        }
    }
}
