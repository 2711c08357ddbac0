//! Semester `<option>` list.

use super::{selector, text_of, Extractor};
use crate::model::Semester;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static OPTION: LazyLock<Selector> = LazyLock::new(|| selector("option"));

/// Parses the semester endpoint, which answers with bare `<option>` elements.
///
/// Options without a (non-empty) `value` attribute are placeholders and are
/// skipped. Document order is the enrollment chronology and is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemesterOptions;

impl Extractor for SemesterOptions {
    type Output = Vec<Semester>;

    fn extract(&self, html: &str) -> Vec<Semester> {
        let doc = Html::parse_document(html);
        doc.select(&OPTION)
            .filter_map(|option| {
                let id = option.value().attr("value").filter(|v| !v.is_empty())?;
                Some(Semester {
                    id: id.to_string(),
                    label: text_of(option),
                })
            })
            .collect()
    }
}
