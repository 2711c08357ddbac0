//! Class entry → document ids.

use super::client::PortalClient;
use crate::http::endpoints::{
    cache_buster, ACTION_LEGACY, ACTION_PREVIEW, CONTROLLER_MODE, DEFAULT_RESOURCE_TYPE,
    LEGACY_CONTROLLER_MODE, PREVIEW_SECONDARY_ID,
};
use crate::model::ClassEntry;
use crate::resolve::TierRequest;
use crate::Result;

use reqwest::Url;
use tracing::{debug, info};

impl PortalClient {
    /// Resolve a class entry into document ids, possibly none.
    ///
    /// Entries without `uuid` or `course_id` resolve to nothing without any
    /// request. Otherwise the configured tiers run in order and the first
    /// non-empty result is returned; the legacy tier is only tried when the
    /// entry also carries `unit_id` and `class_no`.
    pub async fn resolve(&self, entry: &ClassEntry) -> Result<Vec<String>> {
        let args = &entry.args;
        let (Some(uuid), Some(course_id)) = (args.uuid.as_deref(), args.course_id.as_deref())
        else {
            debug!(title = %entry.title, "Class entry lacks uuid or course id");
            return Ok(Vec::new());
        };

        let token = self.refresh_token().await?;
        let headers = self.ajax_headers(token.as_deref())?;

        for tier in &self.tiers {
            let Some(url) = self.tier_url(tier.request, entry, uuid, course_id)? else {
                debug!(request = ?tier.request, title = %entry.title, "Tier not applicable");
                continue;
            };
            let html = self.get_text(url, headers.clone()).await?;
            let ids = tier.scan(&html);
            if !ids.is_empty() {
                info!(request = ?tier.request, count = ids.len(), title = %entry.title, "Resolved documents");
                return Ok(ids);
            }
            debug!(request = ?tier.request, title = %entry.title, "Tier yielded no documents");
        }
        Ok(Vec::new())
    }

    fn tier_url(
        &self,
        request: TierRequest,
        entry: &ClassEntry,
        uuid: &str,
        course_id: &str,
    ) -> Result<Option<Url>> {
        let menu_id = self.config.menu_id.as_str();
        let timestamp = cache_buster();
        match request {
            TierRequest::Preview => self
                .endpoints
                .dispatch(&[
                    ("controllerMode", CONTROLLER_MODE),
                    ("actionType", ACTION_PREVIEW),
                    ("selectedData", course_id),
                    ("id", PREVIEW_SECONDARY_ID),
                    ("unitid", uuid),
                    ("menuId", menu_id),
                    ("_", timestamp.as_str()),
                ])
                .map(Some),
            TierRequest::Legacy => {
                let args = &entry.args;
                let (Some(unit_id), Some(class_no)) =
                    (args.unit_id.as_deref(), args.class_no.as_deref())
                else {
                    return Ok(None);
                };
                let resource_type = args.resource_type.as_deref().unwrap_or(DEFAULT_RESOURCE_TYPE);
                self.endpoints
                    .dispatch(&[
                        ("controllerMode", LEGACY_CONTROLLER_MODE),
                        ("actionType", ACTION_LEGACY),
                        ("courseunitid", uuid),
                        ("subjectid", course_id),
                        ("coursecontentid", unit_id),
                        ("classNo", class_no),
                        ("type", resource_type),
                        ("menuId", menu_id),
                        ("selectedData", "0"),
                        ("_", timestamp.as_str()),
                    ])
                    .map(Some)
            }
        }
    }
}
