//! Subjects table returned for a semester.

use super::{selector, text_of, Extractor};
use crate::model::{Listing, Subject};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| selector("#getStudentSubjectsBasedOnSemesters"));
static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| selector("th"));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// `clickOnCourseContent('12345')`, quotes optional.
static COURSE_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)clickoncoursecontent\s*\(\s*'?\s*(\d+)\s*'?")
        .unwrap_or_else(|e| panic!("invalid course handler pattern: {e}"))
});

/// Parses the first table inside the subjects container (or the whole
/// document when the container is missing).
///
/// Rows without `<td>` cells are header rows and are skipped. The course id
/// is searched anywhere in the row's raw markup; rows without it keep their
/// cells and a `None` course id.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectTable;

impl Extractor for SubjectTable {
    type Output = Listing<Subject>;

    fn extract(&self, html: &str) -> Listing<Subject> {
        let doc = Html::parse_document(html);
        let scope = doc
            .select(&CONTAINER)
            .next()
            .unwrap_or_else(|| doc.root_element());
        let Some(table) = scope.select(&TABLE).next() else {
            return Listing::default();
        };

        let headers = table.select(&HEADER_CELL).map(text_of).collect();
        let items = table
            .select(&ROW)
            .filter_map(|row| {
                let cells: Vec<String> = row.select(&CELL).map(text_of).collect();
                if cells.is_empty() {
                    return None;
                }
                let course_id = COURSE_HANDLER
                    .captures(&row.html())
                    .map(|caps| caps[1].to_string());
                Some(Subject { cells, course_id })
            })
            .collect();

        Listing { headers, items }
    }
}
