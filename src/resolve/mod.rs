//! Resolution of a class entry into document identifiers.
//!
//! Resolution runs an ordered list of [`ResolutionTier`]s. A tier names the
//! request that produces its markup and the [`ResolutionStrategy`]s that scan
//! it; the first strategy to yield ids wins. Tiers are tried in order until
//! one produces ids.
//!
//! The current portal UI exposes ids through the preview endpoint
//! ([`TierRequest::Preview`]). Content authored before that contract only
//! exposes them through the legacy endpoint ([`TierRequest::Legacy`]), either
//! as download handler calls or as plain download links.
//!
//! # Examples
//!
//! ```rust
//! use academy_dl::resolve::{DownloadTriggerStrategy, ResolutionStrategy};
//!
//! let html = r#"<a onclick="downloadcoursedoc('0a1b2c3d')">Slides</a>"#;
//! assert_eq!(DownloadTriggerStrategy.extract_ids(html), vec!["0a1b2c3d"]);
//! ```

pub mod strategy;

pub use strategy::{DownloadHrefStrategy, DownloadTriggerStrategy, ResolutionStrategy};

/// Request a tier's markup comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierRequest {
    /// `actionType=60` preview of the class.
    Preview,
    /// `actionType=343` legacy class content.
    Legacy,
}

/// One resolution tier.
pub struct ResolutionTier {
    pub request: TierRequest,
    pub strategies: Vec<Box<dyn ResolutionStrategy>>,
}

impl std::fmt::Debug for ResolutionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionTier")
            .field("request", &self.request)
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ResolutionTier {
    /// Run the strategies in order over `html`, returning the first non-empty
    /// result.
    pub fn scan(&self, html: &str) -> Vec<String> {
        self.strategies
            .iter()
            .map(|strategy| strategy.extract_ids(html))
            .find(|ids| !ids.is_empty())
            .unwrap_or_default()
    }
}

/// The preview tier followed by the legacy tier.
pub fn default_tiers() -> Vec<ResolutionTier> {
    vec![
        ResolutionTier {
            request: TierRequest::Preview,
            strategies: vec![Box::new(DownloadTriggerStrategy)],
        },
        ResolutionTier {
            request: TierRequest::Legacy,
            strategies: vec![Box::new(DownloadTriggerStrategy), Box::new(DownloadHrefStrategy)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_tier_falls_back_to_href() {
        let tiers = default_tiers();
        let legacy = &tiers[1];
        let html = r#"<a href="/Academy/a/referenceMeterials/downloadcoursedoc/deadbeef01">PDF</a>"#;
        assert_eq!(legacy.scan(html), vec!["deadbeef01"]);
    }

    #[test]
    fn test_preview_tier_ignores_links() {
        let tiers = default_tiers();
        let html = r#"<a href="/x/downloadslidecoursedoc/deadbeef01">PDF</a>"#;
        assert!(tiers[0].scan(html).is_empty());
    }

    #[test]
    fn test_trigger_wins_over_href_in_legacy_markup() {
        let tiers = default_tiers();
        let html = r#"<a href="/x/downloadcoursedoc/aaaaaa11" onclick="downloadcoursedoc('bbbbbb22')">PDF</a>"#;
        assert_eq!(tiers[1].scan(html), vec!["bbbbbb22"]);
    }
}
