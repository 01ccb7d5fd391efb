//! # XenBridge
//!
//! An embeddable XenForo login widget service built with Axum.
//!
//! XenBridge lets a site outside a XenForo installation authenticate visitors
//! against the forum's REST API. Each request resolves the forum session
//! cookie into an identity and renders either a login fragment or a welcome
//! fragment with the visitor's unread-alert count; submitted credentials are
//! exchanged for a one-time forum login redirect.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and outbound gateway traits
//! - **Application Layer** ([`application`]) - Session, login, and alert services
//! - **Infrastructure Layer** ([`infrastructure`]) - Forum API client and diagnostics delivery
//! - **API Layer** ([`api`]) - JSON endpoints for headless embedders
//! - **Web Layer** ([`web`]) - Server-rendered widget fragments
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export XF_API_URL="https://forum.example.com/api"
//! export XF_API_KEY="<superuser api key>"
//! export RETURN_URL="https://www.example.com/"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AlertService, LoginOutcome, LoginService, SessionService,
    };
    pub use crate::domain::entities::{AlertSummary, ApiError, Identity};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
