//! Diagnostic report delivery implementations.

pub mod null_reporter;
pub mod webhook_reporter;

pub use null_reporter::NullReporter;
pub use webhook_reporter::WebhookReporter;
