//! HTTP module containing client setup and portal routing.
//!
//! - [`client`] - HTTP client creation with a session cookie jar and tracing middleware
//! - [`endpoints`] - portal routes, dispatch discriminators and request encoding helpers

pub mod client;
pub mod endpoints;

pub use client::{create_http_client, HttpClientConfig};
pub use endpoints::Endpoints;
