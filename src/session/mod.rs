//! Session state shared by every portal operation.
//!
//! The portal authenticates through cookies and protects AJAX calls with a
//! rotating anti-forgery token. [`Session`] owns the cookie jar and the
//! authenticated flag; it is held by exactly one
//! [`PortalClient`](crate::portal::PortalClient) and is never persisted.
//! Tokens are not stored here at all: they are bound to the most recently
//! rendered page, so callers re-extract one with [`extract_csrf_token`]
//! right before each call that needs it.
//!
//! - [`token`] - anti-forgery token extraction
//! - [`auth`] - login success heuristic

pub mod auth;
pub mod token;

pub use auth::login_succeeded;
pub use token::extract_csrf_token;

use reqwest::{cookie::CookieStore, cookie::Jar, Url};
use std::sync::Arc;

/// Cookie store plus authentication flag for one run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    jar: Arc<Jar>,
    authenticated: bool,
}

impl Session {
    /// Create an unauthenticated session with an empty cookie jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cookie jar handed to the HTTP client.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Whether the last login attempt met the success heuristic.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    /// The `Cookie` header the session would send to `url`, if any cookie
    /// applies.
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        self.jar
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }
}
