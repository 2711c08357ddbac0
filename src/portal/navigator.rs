//! Semester → subject → unit → class navigation.
//!
//! Each step issues its request, hands the body to the matching
//! [`Extractor`] and turns an empty result into
//! [`Error::NavigationParseFailed`] carrying an excerpt of the raw markup.

use super::client::PortalClient;
use crate::extract::{
    excerpt, Extractor, LiveUnitClasses, SemesterOptions, SubjectTable, UnitTabs,
};
use crate::http::endpoints::{
    cache_buster, numeric_only, ACTION_CLASSES, ACTION_SUBJECTS, ACTION_UNITS, CLASSES_SUB_TYPE,
    CONTROLLER_MODE,
};
use crate::model::{ClassEntry, Listing, Semester, Subject, Unit};
use crate::{Error, Result};

use reqwest::header::{HeaderMap, REFERER};
use tracing::{debug, warn};

fn parse_failed(stage: &'static str, html: &str) -> Error {
    warn!(stage, "Expected markup missing from response");
    Error::NavigationParseFailed {
        stage,
        excerpt: excerpt(html),
    }
}

impl PortalClient {
    /// List the semesters of the logged-in student, in server order.
    pub async fn list_semesters(&self) -> Result<Vec<Semester>> {
        // The listing is only served once the profile page has set up the
        // navigation state.
        let profile = self.endpoints.profile()?;
        self.get_text(profile.clone(), HeaderMap::new()).await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            profile
                .as_str()
                .parse()
                .map_err(|_| Error::InvalidUrl(profile.to_string()))?,
        );
        let html = self.get_text(self.endpoints.semesters()?, headers).await?;

        let semesters = SemesterOptions.extract(&html);
        if semesters.is_empty() {
            return Err(parse_failed("semesters", &html));
        }
        debug!(count = semesters.len(), "Parsed semesters");
        Ok(semesters)
    }

    /// List the subjects of a semester.
    ///
    /// Only the digits of `semester_id` are sent. Rows without a course id
    /// are kept with `course_id: None`.
    pub async fn list_subjects(&self, semester_id: &str) -> Result<Listing<Subject>> {
        let id = numeric_only(semester_id);
        if id.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: "semester",
                label: semester_id.to_string(),
            });
        }

        let token = self.refresh_token().await?;
        let headers = self.ajax_headers(token.as_deref())?;
        let fields = [
            ("controllerMode", CONTROLLER_MODE),
            ("actionType", ACTION_SUBJECTS),
            ("id", id.as_str()),
            ("menuId", self.config.menu_id.as_str()),
            ("_csrf", token.as_deref().unwrap_or_default()),
        ];
        let html = self
            .post_form(self.endpoints.dispatch(&[])?, headers, &fields)
            .await?;

        let listing = SubjectTable.extract(&html);
        if listing.is_empty() {
            return Err(parse_failed("subjects", &html));
        }
        let unselectable = listing.items.iter().filter(|s| !s.is_selectable()).count();
        if unselectable > 0 {
            debug!(unselectable, "Subject rows without a course id");
        }
        Ok(listing)
    }

    /// List the units of a course.
    pub async fn list_units(&self, course_id: &str) -> Result<Vec<Unit>> {
        let token = self.refresh_token().await?;
        let headers = self.ajax_headers(token.as_deref())?;
        let url = self.endpoints.dispatch(&[
            ("controllerMode", CONTROLLER_MODE),
            ("actionType", ACTION_UNITS),
            ("id", course_id),
            ("menuId", self.config.menu_id.as_str()),
            ("_csrf", token.as_deref().unwrap_or_default()),
        ])?;
        let html = self.get_text(url, headers).await?;

        let units = UnitTabs.extract(&html);
        if units.is_empty() {
            return Err(parse_failed("units", &html));
        }
        for unit in units.iter().filter(|u| u.unit_id.is_none()) {
            debug!(title = %unit.title, "Unit tab without a unit id");
        }
        Ok(units)
    }

    /// List the classes of a unit.
    ///
    /// The timestamp parameter keeps the server from answering with cached
    /// output.
    pub async fn list_classes(&self, unit_id: &str) -> Result<Listing<ClassEntry>> {
        let headers = self.ajax_headers(None)?;
        let timestamp = cache_buster();
        let url = self.endpoints.dispatch(&[
            ("controllerMode", CONTROLLER_MODE),
            ("actionType", ACTION_CLASSES),
            ("coursecontentid", unit_id),
            ("menuId", self.config.menu_id.as_str()),
            ("subType", CLASSES_SUB_TYPE),
            ("_", timestamp.as_str()),
        ])?;
        let html = self.get_text(url, headers).await?;

        let listing = LiveUnitClasses.extract(&html);
        if listing.is_empty() {
            return Err(parse_failed("classes", &html));
        }
        Ok(listing)
    }
}
