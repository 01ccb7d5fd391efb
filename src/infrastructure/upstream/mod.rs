//! Forum API client implementation.

pub mod http_transport;

pub use http_transport::{HttpTransport, UpstreamSettings};
