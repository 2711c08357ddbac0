//! Configuration structures and defaults for the portal client.
//!
//! [`PortalConfig`] is assembled by
//! [`PortalClientBuilder`](super::PortalClientBuilder); nothing is read from
//! files or the environment.

use crate::http::endpoints::DEFAULT_MENU_ID;
use crate::StyleOptions;

use reqwest::header::HeaderMap;
use std::time::Duration;

/// Configuration structure for the portal client.
#[derive(Clone, Debug)]
pub struct PortalConfig {
    /// Base host every route resolves against.
    pub base_url: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Timeout of page and AJAX requests.
    pub timeout: Duration,
    /// Timeout of a single document download.
    pub download_timeout: Duration,
    /// Pause between the download batches of two classes.
    pub batch_pause: Duration,
    /// Menu discriminator shared by every AJAX call.
    pub menu_id: String,
    /// Optional proxy configuration.
    pub proxy: Option<reqwest::Proxy>,
    /// Extra HTTP headers sent with every request.
    pub headers: Option<HeaderMap>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
}

impl PortalConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://www.pesuacademy.com";
    pub const DEFAULT_USER_AGENT: &'static str = "Mozilla/5.0 (compatible; PESU-Scraper/1.0)";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);
    pub const DEFAULT_BATCH_PAUSE: Duration = Duration::from_millis(400);
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            download_timeout: Self::DEFAULT_DOWNLOAD_TIMEOUT,
            batch_pause: Self::DEFAULT_BATCH_PAUSE,
            menu_id: DEFAULT_MENU_ID.to_string(),
            proxy: None,
            headers: None,
            style_options: StyleOptions::default(),
        }
    }
}
