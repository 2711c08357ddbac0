//! Entities parsed from portal responses.
//!
//! Every identifier is an opaque string: it is extracted from markup and sent
//! back to the server verbatim, never interpreted. An entity missing its
//! identifier is kept for display but blocks navigation below it.

use crate::{Error, Result};

/// A semester option from the semester listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    pub id: String,
    pub label: String,
}

/// One row of the subjects table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Display cells in column order.
    pub cells: Vec<String>,
    pub course_id: Option<String>,
}

impl Subject {
    /// Whether the row can be navigated into.
    pub fn is_selectable(&self) -> bool {
        self.course_id.is_some()
    }

    /// The course id, or [`Error::MissingIdentifier`] when the row has none.
    pub fn require_course_id(&self) -> Result<&str> {
        self.course_id.as_deref().ok_or_else(|| Error::MissingIdentifier {
            entity: "subject",
            label: self.cells.join(" | "),
        })
    }
}

/// A unit tab of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub number: Option<u32>,
    pub title: String,
    pub unit_id: Option<String>,
}

impl Unit {
    /// The unit id, or [`Error::MissingIdentifier`] when the tab has none.
    pub fn require_unit_id(&self) -> Result<&str> {
        self.unit_id.as_deref().ok_or_else(|| Error::MissingIdentifier {
            entity: "unit",
            label: self.title.clone(),
        })
    }
}

/// Arguments of the inline handler attached to a class row.
///
/// The server may omit trailing arguments, so each one is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassArgs {
    pub uuid: Option<String>,
    pub course_id: Option<String>,
    pub unit_id: Option<String>,
    pub class_no: Option<String>,
    pub resource_type: Option<String>,
}

/// One class row of a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub title: String,
    /// Per-column resource counts: digits, the cell's literal text, or `-`.
    pub resource_counts: Vec<String>,
    pub args: ClassArgs,
}

impl ClassEntry {
    /// Condensed `[SI No., Name, Slides]` row for menus.
    ///
    /// `index` is the 1-based position used when the entry has no class number.
    pub fn display_row(&self, index: usize) -> [String; 3] {
        let number = self
            .args
            .class_no
            .clone()
            .unwrap_or_else(|| index.to_string());
        let slides = self
            .resource_counts
            .get(2)
            .cloned()
            .unwrap_or_else(|| "-".to_string());
        [number, self.title.clone(), slides]
    }
}

/// A parsed table: column labels plus one item per body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<T> {
    pub headers: Vec<String>,
    pub items: Vec<T>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
