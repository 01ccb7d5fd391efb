//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the forum API transport and diagnostics
//! delivery.
//!
//! # Modules
//!
//! - [`upstream`] - reqwest-backed forum API client
//! - [`reporting`] - Diagnostic report delivery (webhook and no-op implementations)

pub mod reporting;
pub mod upstream;
