//! HTTP client setup and middleware configuration.
//!
//! The portal keeps its authentication state in cookies, so the client is
//! always built around an explicit cookie jar owned by the caller's
//! [`Session`](crate::session::Session). Requests are traced through
//! [`TracingMiddleware`]; no retry middleware is installed because every
//! portal call is attempted exactly once.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use academy_dl::http::{create_http_client, HttpClientConfig};
//! use reqwest::cookie::Jar;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig::new(Arc::new(Jar::default()));
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{cookie::Jar, header::HeaderMap, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::{sync::Arc, time::Duration};

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Cookie jar shared with the session.
    pub cookie_jar: Arc<Jar>,
    /// Optional proxy configuration.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
    /// Request timeout applied to every call unless overridden per request.
    pub timeout: Duration,
}

impl HttpClientConfig {
    /// Default timeout for page and AJAX requests.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a configuration backed by the given cookie jar.
    pub fn new(cookie_jar: Arc<Jar>) -> Self {
        Self {
            cookie_jar,
            proxy: None,
            headers: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// This function sets up a reqwest client with:
/// - the session cookie jar as cookie provider
/// - redirect following (the login flow ends on the profile page)
/// - tracing middleware for request/response logging
/// - optional proxy and default headers
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut inner_client_builder = reqwest::Client::builder()
        .cookie_provider(config.cookie_jar)
        .timeout(config.timeout);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
