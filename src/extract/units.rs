//! Unit tabs of a course page.

use super::{selector, text_of, Extractor};
use crate::model::Unit;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| selector("#courselistunit"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

static UNIT_NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?i)Unit\s*(\d+)"));
static UNIT_HANDLER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)handleclassUnit\s*\(\s*'?(\d+)'?\s*\)"));
static UNIT_HREF: LazyLock<Regex> = LazyLock::new(|| pattern(r"courseUnit_(\d+)"));

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid unit pattern {re}: {e}"))
}

/// Parses every anchor inside the unit list (or the whole document when the
/// container is missing).
///
/// The unit id comes from the `handleclassUnit(..)` handler, else from a
/// `courseUnit_<n>` href; each anchor is resolved independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitTabs;

impl Extractor for UnitTabs {
    type Output = Vec<Unit>;

    fn extract(&self, html: &str) -> Vec<Unit> {
        let doc = Html::parse_document(html);
        let scope = doc
            .select(&CONTAINER)
            .next()
            .unwrap_or_else(|| doc.root_element());

        scope
            .select(&ANCHOR)
            .map(|anchor| {
                let title = text_of(anchor);
                let number = unit_number(&title);
                let unit_id = anchor
                    .value()
                    .attr("onclick")
                    .and_then(|onclick| UNIT_HANDLER.captures(onclick))
                    .or_else(|| {
                        anchor
                            .value()
                            .attr("href")
                            .and_then(|href| UNIT_HREF.captures(href))
                    })
                    .map(|caps| caps[1].to_string());
                Unit {
                    number,
                    title,
                    unit_id,
                }
            })
            .collect()
    }
}

fn unit_number(title: &str) -> Option<u32> {
    let digits = UNIT_NUMBER.captures(title)?.get(1)?.as_str();
    match digits.parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(title, digits, error = %e, "Unit number out of range; leaving it unset");
            None
        }
    }
}
