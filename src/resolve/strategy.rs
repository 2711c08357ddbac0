//! Pure strategies mapping markup to document ids.

use crate::extract::dedup_first_seen;
use regex::Regex;
use std::sync::LazyLock;

/// `downloadcoursedoc('<hex-or-uuid>')`
static DOWNLOAD_TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)downloadcoursedoc\s*\(\s*['"]([a-f0-9\-]{6,})['"]"#)
        .unwrap_or_else(|e| panic!("invalid download trigger pattern: {e}"))
});

/// `href="…/downloadcoursedoc/<id>"` or `…/downloadslidecoursedoc/<id>`
static DOWNLOAD_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=['"][^'"]*download(?:slide)?coursedoc/([a-f0-9\-]{6,})"#)
        .unwrap_or_else(|e| panic!("invalid download href pattern: {e}"))
});

/// Scans raw markup for document identifiers.
///
/// Implementations return ids deduplicated in first-seen order.
pub trait ResolutionStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn extract_ids(&self, html: &str) -> Vec<String>;
}

fn captures_of(re: &Regex, html: &str) -> Vec<String> {
    dedup_first_seen(re.captures_iter(html).map(|caps| caps[1].to_string()))
}

/// Matches the `downloadcoursedoc(..)` handler call of the current UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadTriggerStrategy;

impl ResolutionStrategy for DownloadTriggerStrategy {
    fn name(&self) -> &'static str {
        "download-trigger"
    }

    fn extract_ids(&self, html: &str) -> Vec<String> {
        captures_of(&DOWNLOAD_TRIGGER, html)
    }
}

/// Matches anchors linking straight to a download path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadHrefStrategy;

impl ResolutionStrategy for DownloadHrefStrategy {
    fn name(&self) -> &'static str {
        "download-href"
    }

    fn extract_ids(&self, html: &str) -> Vec<String> {
        captures_of(&DOWNLOAD_HREF, html)
    }
}
