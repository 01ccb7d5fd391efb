//! Utility functions shared across the application.
//!
//! - [`cookies`] - Session cookie extraction from request headers
//! - [`sanitize`] - Form input sanitization

pub mod cookies;
pub mod sanitize;
