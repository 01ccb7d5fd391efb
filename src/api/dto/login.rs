//! DTOs for the JSON login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::LoginOutcome;
use crate::domain::entities::{ApiError, ErrorField};

/// A credential pair submitted for exchange.
///
/// Length caps bound obviously hostile input; real validation is the forum's
/// job and its rejections come back in the response body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1, max = 255))]
    pub password: String,
}

/// Outcome of a login exchange.
///
/// Tagged so the embedder can decide whether to follow the redirect or render
/// the errors inline.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoginResponse {
    Redirect { target: String },
    Errors { errors: Vec<ErrorItem> },
}

/// One upstream rejection, classified for per-field rendering.
#[derive(Debug, Serialize)]
pub struct ErrorItem {
    pub code: String,
    pub message: String,
    /// Which form field the error belongs to: `username`, `password`, or `general`.
    pub field: &'static str,
}

impl From<&ApiError> for ErrorItem {
    fn from(error: &ApiError) -> Self {
        let field = match error.field() {
            ErrorField::Username => "username",
            ErrorField::Password => "password",
            ErrorField::General => "general",
        };

        Self {
            code: error.code.clone(),
            message: error.display_message().to_string(),
            field,
        }
    }
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Redirect(target) => Self::Redirect { target },
            LoginOutcome::Rejected(errors) => Self::Errors {
                errors: errors.iter().map(ErrorItem::from).collect(),
            },
        }
    }
}
