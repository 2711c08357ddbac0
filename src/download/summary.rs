//! Per-class download summary.
//!
//! A [`Summary`] records what happened to one selected class: which files
//! were saved, which document ids failed and the overall [`Status`].
//!
//! # Examples
//!
//! ```rust
//! use academy_dl::download::{Status, Summary};
//! use std::path::PathBuf;
//!
//! let summary = Summary::new(1, "Intro to Sets")
//!     .with_saved(vec![PathBuf::from("out/01_Intro_to_Sets.pdf")]);
//! assert_eq!(summary.status(), &Status::Success);
//!
//! let empty = Summary::new(2, "Orientation").no_documents();
//! assert!(matches!(empty.status(), Status::NoDocuments));
//! ```

use std::path::PathBuf;

/// Outcome of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Every resolved document was saved.
    Success,
    /// Some documents were saved, the ids listed in the summary were not.
    Partial,
    /// Resolution found no document ids.
    NoDocuments,
    /// Documents were resolved but none could be saved, or resolution itself
    /// failed.
    Fail(String),
    /// The class was not processed, with reason.
    Skipped(String),
    /// Not processed yet.
    NotStarted,
}

/// Represents the download summary of one class.
#[derive(Debug, Clone)]
pub struct Summary {
    /// 1-based position of the class in the listing.
    index: usize,
    /// Class title.
    title: String,
    /// Files written to disk.
    saved: Vec<PathBuf>,
    /// Document ids that could not be fetched or written.
    failed: Vec<String>,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] for the class at `index`.
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            saved: Vec::new(),
            failed: Vec::new(),
            status: Status::NotStarted,
        }
    }

    /// Attach a status.
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Record saved files; the status follows from what was saved and failed.
    pub fn with_saved(self, saved: Vec<PathBuf>) -> Self {
        let status = match (saved.is_empty(), self.failed.is_empty()) {
            (false, true) => Status::Success,
            (false, false) => Status::Partial,
            (true, _) => Status::Fail("no files saved".to_string()),
        };
        Self {
            saved,
            status,
            ..self
        }
    }

    /// Record document ids that could not be saved. Call before
    /// [`Summary::with_saved`].
    pub fn with_failed(self, failed: Vec<String>) -> Self {
        Self { failed, ..self }
    }

    /// Mark the class as having no documents.
    pub fn no_documents(self) -> Self {
        self.with_status(Status::NoDocuments)
    }

    /// Mark the summary as failed with a message.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        self.with_status(Status::Fail(msg.to_string()))
    }

    /// Mark the summary as skipped with a message.
    pub fn skip(self, msg: impl std::fmt::Display) -> Self {
        self.with_status(Status::Skipped(msg.to_string()))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    pub fn status(&self) -> &Status {
        &self.status
    }
}
