//! Builder pattern implementation for creating [`PortalClient`] instances.
//!
//! # Examples
//!
//! ```rust
//! use academy_dl::portal::PortalClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), academy_dl::Error> {
//! let client = PortalClientBuilder::new()
//!     .base_url("https://www.pesuacademy.com")
//!     .batch_pause(Duration::from_millis(250))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use academy_dl::portal::PortalClientBuilder;
//!
//! # fn example() -> Result<(), academy_dl::Error> {
//! let client = PortalClientBuilder::hidden().build()?;
//! # Ok(())
//! # }
//! ```

use super::{client::PortalClient, config::PortalConfig};
use crate::resolve::{default_tiers, ResolutionTier};
use crate::{ProgressBarOpts, Result, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::time::Duration;

/// A builder used to create a [`PortalClient`].
///
/// ```rust
/// use academy_dl::portal::PortalClientBuilder;
///
/// let builder = PortalClientBuilder::new().menu_id("653");
/// ```
pub struct PortalClientBuilder {
    config: PortalConfig,
    tiers: Vec<ResolutionTier>,
}

impl Default for PortalClientBuilder {
    fn default() -> Self {
        Self {
            config: PortalConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl PortalClientBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        PortalClientBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        PortalClientBuilder::default().style_options(StyleOptions::new(
            ProgressBarOpts::hidden(),
            ProgressBarOpts::hidden(),
        ))
    }

    /// Sets the base host, e.g. `https://www.pesuacademy.com`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Timeout of page and AJAX requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Timeout of a single document download.
    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.config.download_timeout = timeout;
        self
    }

    /// Pause inserted between the download batches of two classes.
    pub fn batch_pause(mut self, pause: Duration) -> Self {
        self.config.batch_pause = pause;
        self
    }

    pub fn menu_id(mut self, menu_id: impl Into<String>) -> Self {
        self.config.menu_id = menu_id.into();
        self
    }

    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Replace the resolution tiers tried for each class entry.
    pub fn resolution_tiers(mut self, tiers: Vec<ResolutionTier>) -> Self {
        self.tiers = tiers;
        self
    }

    fn new_header(&self) -> HeaderMap {
        self.config.headers.clone().unwrap_or_default()
    }

    /// Add HTTP headers sent with every request.
    ///
    /// Repeated calls merge all maps into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add one HTTP header sent with every request.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();
        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`PortalClient`] with the specified options.
    pub fn build(self) -> Result<PortalClient> {
        PortalClient::new(self.config, self.tiers)
    }
}
