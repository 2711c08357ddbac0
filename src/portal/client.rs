//! The portal client: one authenticated session and the operations on it.

use super::config::PortalConfig;
use crate::http::endpoints::{encode_form, Endpoints};
use crate::http::{create_http_client, HttpClientConfig};
use crate::resolve::ResolutionTier;
use crate::session::{extract_csrf_token, login_succeeded, Session};
use crate::{Error, Result};

use indicatif::{MultiProgress, ProgressDrawTarget};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, REFERER, USER_AGENT};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, info, warn};

pub(crate) const CSRF_HEADER: &str = "x-csrf-token";
pub(crate) const REQUESTED_WITH_HEADER: &str = "x-requested-with";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for one run against the portal.
///
/// Holds the [`Session`] (cookies and authenticated flag) and hands it to
/// every request. Operations run strictly one after another; none of them
/// retries.
///
/// ```rust,no_run
/// use academy_dl::portal::PortalClientBuilder;
///
/// # async fn example() -> Result<(), academy_dl::Error> {
/// let mut client = PortalClientBuilder::new().build()?;
/// client.login("PES1UG20CS001", "secret").await?;
/// let semesters = client.list_semesters().await?;
/// let subjects = client.list_subjects(&semesters[0].id).await?;
/// # Ok(())
/// # }
/// ```
pub struct PortalClient {
    pub(crate) http: ClientWithMiddleware,
    pub(crate) session: Session,
    pub(crate) endpoints: Endpoints,
    pub(crate) config: PortalConfig,
    pub(crate) tiers: Vec<ResolutionTier>,
    pub(crate) progress: MultiProgress,
}

impl std::fmt::Debug for PortalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalClient")
            .field("base_url", &self.endpoints.base().as_str())
            .field("authenticated", &self.session.is_authenticated())
            .field("config", &self.config)
            .field("tiers", &self.tiers)
            .finish()
    }
}

impl PortalClient {
    pub(crate) fn new(config: PortalConfig, tiers: Vec<ResolutionTier>) -> Result<Self> {
        let endpoints = Endpoints::new(&config.base_url)?;
        let session = Session::new();

        let mut headers = config.headers.clone().unwrap_or_default();
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);
        if !headers.contains_key(REFERER) {
            headers.insert(REFERER, header_value(endpoints.login_page()?.as_str())?);
        }

        let http = create_http_client(HttpClientConfig {
            cookie_jar: session.cookie_jar(),
            proxy: config.proxy.clone(),
            headers: Some(headers),
            timeout: config.timeout,
        })?;

        let progress = if config.style_options.is_enabled() {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        Ok(Self {
            http,
            session,
            endpoints,
            config,
            tiers,
            progress,
        })
    }

    /// The session state of this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Log in with the portal credentials.
    ///
    /// The login page is fetched for its anti-forgery token, then the
    /// credentials are posted as a form. Success is inferred by
    /// [`login_succeeded`]; on failure the session keeps whatever cookies the
    /// server set but stays unauthenticated. A request that gets no response
    /// at all is reported as [`Error::AuthenticationFailed`] with status `0`.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let login_page = self.endpoints.login_page()?;
        let page = self
            .get_text(login_page.clone(), HeaderMap::new())
            .await
            .map_err(|e| login_unreachable(login_page.as_str(), e))?;
        let token = extract_csrf_token(&page);
        debug!(has_token = token.is_some(), "Fetched login page");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        if let Some(token) = &token {
            headers.insert(HeaderName::from_static(CSRF_HEADER), header_value(token)?);
        }

        let login_post = self.endpoints.login_post()?;
        let response = self
            .http
            .post(login_post.clone())
            .headers(headers)
            .body(encode_form(&[("j_username", username), ("j_password", password)]))
            .send()
            .await
            .map_err(|e| login_unreachable(login_post.as_str(), e.into()))?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| login_unreachable(&url, e.into()))?;

        let authenticated = login_succeeded(status, &url, &body);
        self.session.set_authenticated(authenticated);
        if authenticated {
            info!(%url, "Login successful");
            Ok(())
        } else {
            warn!(status = status.as_u16(), %url, "Login heuristic not met");
            Err(Error::AuthenticationFailed {
                status: status.as_u16(),
                url,
                reason: "login heuristic not met".to_string(),
            })
        }
    }

    /// Re-fetch the profile page and extract a fresh anti-forgery token.
    ///
    /// Tokens rotate with every rendered page, so this is called right
    /// before each call that sends one instead of caching the value.
    pub async fn refresh_token(&self) -> Result<Option<String>> {
        let page = self.get_text(self.endpoints.profile()?, HeaderMap::new()).await?;
        let token = extract_csrf_token(&page);
        if token.is_none() {
            debug!("Profile page carries no anti-forgery token");
        }
        Ok(token)
    }

    /// Headers of an AJAX call issued from the profile page.
    pub(crate) fn ajax_headers(&self, token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, header_value(self.endpoints.profile()?.as_str())?);
        headers.insert(
            HeaderName::from_static(REQUESTED_WITH_HEADER),
            HeaderValue::from_static("XMLHttpRequest"),
        );
        if let Some(token) = token {
            headers.insert(HeaderName::from_static(CSRF_HEADER), header_value(token)?);
        }
        Ok(headers)
    }

    /// GET `url` and return the body, whatever the status.
    pub(crate) async fn get_text(&self, url: Url, headers: HeaderMap) -> Result<String> {
        debug!(%url, "GET");
        let response = self.http.get(url).headers(headers).send().await?;
        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), "Non-success status");
        }
        Ok(response.text().await?)
    }

    /// POST a form to `url` and return the body, whatever the status.
    pub(crate) async fn post_form(
        &self,
        url: Url,
        mut headers: HeaderMap,
        fields: &[(&str, &str)],
    ) -> Result<String> {
        debug!(%url, "POST");
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        let response = self
            .http
            .post(url)
            .headers(headers)
            .body(encode_form(fields))
            .send()
            .await?;
        Ok(response.text().await?)
    }
}

/// Transport failures during login end the run like a rejected login.
fn login_unreachable(url: &str, error: Error) -> Error {
    let reason = match error {
        Error::Reqwest { source } => source.to_string(),
        Error::Middleware { source } => source.to_string(),
        other => return other,
    };
    warn!(%url, %reason, "Login request failed");
    Error::AuthenticationFailed {
        status: 0,
        url: url.to_string(),
        reason,
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::Config(format!("header value {value:?}: {e}")))
}
