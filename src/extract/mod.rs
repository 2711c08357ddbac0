//! Structured extractors over portal markup.
//!
//! Each endpoint (and each markup version of it) has one [`Extractor`]
//! implementation. Extractors are pure: the same input always yields the same
//! entities, so they are validated against golden HTML fixtures and drift in
//! the server markup stays isolated here.
//!
//! - [`semesters`] - `<option>` list of the semester endpoint
//! - [`subjects`] - subjects table with inline course handlers
//! - [`units`] - unit tabs of a course page
//! - [`classes`] - live unit content table with five-argument class handlers

pub mod classes;
pub mod semesters;
pub mod subjects;
pub mod units;

pub use classes::LiveUnitClasses;
pub use semesters::SemesterOptions;
pub use subjects::SubjectTable;
pub use units::UnitTabs;

use scraper::{ElementRef, Selector};
use std::collections::HashSet;

/// Turns one response body into the entities it describes.
pub trait Extractor {
    type Output;

    fn extract(&self, html: &str) -> Self::Output;
}

/// Number of characters of raw markup kept for diagnostics.
pub const EXCERPT_LEN: usize = 1000;

/// Leading part of a response body.
pub fn excerpt(html: &str) -> String {
    html.chars().take(EXCERPT_LEN).collect()
}

/// Text content of an element: every text node trimmed, blanks dropped,
/// joined by single spaces.
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn dedup_first_seen<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

pub(crate) fn selector(css: &str) -> Selector {
    // Only called with literal selectors.
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e}"))
}
