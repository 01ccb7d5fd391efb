//! Business logic services for the application layer.

pub mod alert_service;
pub mod login_service;
pub mod session_service;

pub use alert_service::AlertService;
pub use login_service::{LoginOutcome, LoginService};
pub use session_service::SessionService;
