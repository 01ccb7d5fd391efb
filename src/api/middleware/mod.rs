//! HTTP middleware for request processing.
//!
//! Provides observability middleware; the widget itself is public, so there
//! is no inbound authentication layer.

pub mod tracing;
