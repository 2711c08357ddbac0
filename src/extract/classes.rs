//! Live unit content: the table of classes inside a unit.
//!
//! Each row carries a `handleclasscoursecontentunit(uuid, courseId, unitId,
//! classNo, resourceType)` handler, either on the row itself, on its first
//! cell, or on an anchor inside that cell. Older content omits trailing
//! arguments, so every argument is optional and partial calls are accepted.

use super::{selector, text_of, Extractor};
use crate::model::{ClassArgs, ClassEntry, Listing};
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::warn;

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static THEAD: LazyLock<Selector> = LazyLock::new(|| selector("thead"));
static TBODY: LazyLock<Selector> = LazyLock::new(|| selector("tbody"));
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

static CLASS_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    let arg = r#"['"]?([^,'")]*)['"]?"#;
    let rest = format!(r"(?:\s*,\s*{arg})?");
    let re = format!(r"(?i)handleclasscoursecontentunit\s*\(\s*{arg}{rest}{rest}{rest}{rest}");
    Regex::new(&re).unwrap_or_else(|e| panic!("invalid class handler pattern: {e}"))
});
static DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)").unwrap_or_else(|e| panic!("invalid digits pattern: {e}"))
});

/// Parses the first table of a live unit content response.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveUnitClasses;

impl Extractor for LiveUnitClasses {
    type Output = Listing<ClassEntry>;

    fn extract(&self, html: &str) -> Listing<ClassEntry> {
        let doc = Html::parse_document(html);
        let Some(table) = doc.select(&TABLE).next() else {
            return Listing::default();
        };

        let header_scope = table.select(&THEAD).next().unwrap_or(table);
        let headers = header_scope.select(&HEADER_CELL).map(text_of).collect();

        let body_scope = table.select(&TBODY).next().unwrap_or(table);
        let items = body_scope.select(&ROW).filter_map(parse_row).collect();

        Listing { headers, items }
    }
}

fn parse_row(row: ElementRef<'_>) -> Option<ClassEntry> {
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
    let first = *cells.first()?;
    let title = text_of(first);

    let args = std::iter::once(row)
        .chain(std::iter::once(first))
        .chain(first.select(&ANCHOR))
        .filter_map(|el| el.value().attr("onclick"))
        .find_map(|onclick| CLASS_HANDLER.captures(onclick))
        .map(|caps| class_args(&caps))
        .unwrap_or_default();

    if let Some(class_no) = args.class_no.as_deref() {
        if !class_no.bytes().all(|b| b.is_ascii_digit()) {
            warn!(title = %title, class_no, "Non-numeric class number in class handler");
        }
    }

    let resource_counts = cells[1..].iter().map(|cell| resource_count(*cell)).collect();

    Some(ClassEntry {
        title,
        resource_counts,
        args,
    })
}

fn class_args(caps: &Captures<'_>) -> ClassArgs {
    let arg = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    ClassArgs {
        uuid: arg(1),
        course_id: arg(2),
        unit_id: arg(3),
        class_no: arg(4),
        resource_type: arg(5),
    }
}

/// First number in the cell (or its anchor), else the literal text, else `-`.
fn resource_count(cell: ElementRef<'_>) -> String {
    let text = match cell.select(&ANCHOR).next() {
        Some(anchor) => text_of(anchor),
        None => text_of(cell),
    };
    match DIGITS.captures(&text) {
        Some(caps) => caps[1].to_string(),
        None if text.is_empty() => "-".to_string(),
        None => text,
    }
}
