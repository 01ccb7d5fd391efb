//! Handler for the JSON login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges submitted credentials for a login redirect target.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// {"username": "alice", "password": "hunter2"}
/// ```
///
/// # Response
///
/// Either a redirect the embedder should follow:
///
/// ```json
/// {"kind": "redirect", "target": "https://forum.example.com/login/token?t=..."}
/// ```
///
/// or the forum's rejections, classified per form field:
///
/// ```json
/// {"kind": "errors", "errors": [
///   {"code": "incorrect_password", "message": "Incorrect password", "field": "password"}
/// ]}
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the payload fails validation.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .login_service
        .attempt(&payload.username, &payload.password)
        .await;

    Ok(Json(LoginResponse::from(outcome)))
}
