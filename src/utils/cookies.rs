//! Session cookie extraction from request headers.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Reads the forum session token from the `Cookie` header.
///
/// The cookie name is `<prefix>session`, where the prefix matches the forum
/// installation's cookie prefix. Handles multiple cookies by splitting on
/// semicolons and ignoring everything but the session entry. An empty value
/// is treated as absent.
pub fn session_cookie(headers: &HeaderMap, prefix: &str) -> Option<String> {
    let cookie_name = format!("{prefix}session");

    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(name), Some(value)) if name == cookie_name => Some(value.to_string()),
                    _ => None,
                }
            })
        })
        .filter(|token| !token.is_empty())
}
