//! Portal routes and AJAX dispatch parameters.
//!
//! One physical route (`/Academy/s/studentProfilePESUAdmin`) serves most of
//! the logical operations; the operation is selected by the
//! `controllerMode`/`actionType` pair plus the shared `menuId`.

use crate::{Error, Result};
use reqwest::Url;
use std::time::{SystemTime, UNIX_EPOCH};

pub const LOGIN_PAGE_PATH: &str = "/Academy/";
pub const LOGIN_POST_PATH: &str = "/Academy/j_spring_security_check";
pub const PROFILE_PATH: &str = "/Academy/s/studentProfilePESU";
pub const SEMESTERS_PATH: &str = "/Academy/a/studentProfilePESU/getStudentSemestersPESU";
pub const DISPATCH_PATH: &str = "/Academy/s/studentProfilePESUAdmin";
pub const DOWNLOAD_PATH: &str = "/Academy/a/referenceMeterials/downloadslidecoursedoc/";

/// Lowercased marker of the authenticated landing page, matched against the
/// final login URL.
pub const PROFILE_MARKER: &str = "studentprofilepesu";

pub const DEFAULT_MENU_ID: &str = "653";
pub const CONTROLLER_MODE: &str = "6403";
pub const LEGACY_CONTROLLER_MODE: &str = "9978";
pub const ACTION_SUBJECTS: &str = "38";
pub const ACTION_UNITS: &str = "42";
pub const ACTION_CLASSES: &str = "43";
pub const ACTION_PREVIEW: &str = "60";
pub const ACTION_LEGACY: &str = "343";
pub const CLASSES_SUB_TYPE: &str = "3";
/// Fixed secondary id sent with preview requests.
pub const PREVIEW_SECONDARY_ID: &str = "2";
/// Resource type sent to the legacy endpoint when a class entry carries none.
pub const DEFAULT_RESOURCE_TYPE: &str = "2";

/// Absolute URLs of every route, resolved against one base host.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse the base host, e.g. `https://www.pesuacademy.com`.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base.to_string()));
        }
        Ok(Self { base })
    }

    /// Base host all routes resolve against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::InvalidUrl(format!("{path}: {e}")))
    }

    pub fn login_page(&self) -> Result<Url> {
        self.join(LOGIN_PAGE_PATH)
    }

    pub fn login_post(&self) -> Result<Url> {
        self.join(LOGIN_POST_PATH)
    }

    pub fn profile(&self) -> Result<Url> {
        self.join(PROFILE_PATH)
    }

    pub fn semesters(&self) -> Result<Url> {
        self.join(SEMESTERS_PATH)
    }

    /// The AJAX dispatch route with the given query pairs attached.
    pub fn dispatch(&self, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.join(DISPATCH_PATH)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Download route for one document id.
    pub fn download(&self, id: &str) -> Result<Url> {
        self.join(&format!("{DOWNLOAD_PATH}{id}"))
    }
}

/// Current time in milliseconds, used as the `_` cache-busting parameter.
pub fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}

/// Strip every non-digit character from a semester id.
pub fn numeric_only(id: &str) -> String {
    id.chars().filter(char::is_ascii_digit).collect()
}

/// Encode form fields as `application/x-www-form-urlencoded`.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
