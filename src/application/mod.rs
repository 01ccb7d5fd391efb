//! Application layer services implementing business logic.
//!
//! This layer orchestrates the forum exchanges by coordinating transport
//! calls, payload parsing, and degradation rules. Services consume the domain
//! gateway traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::session_service::SessionService`] - Session token resolution
//! - [`services::login_service::LoginService`] - Credential exchange and redirect building
//! - [`services::alert_service::AlertService`] - Unread-alert lookup
//!
//! Every upstream failure is absorbed here into plain data (a guest identity,
//! a rejected login, a zero alert count); services never return errors.

pub mod services;
