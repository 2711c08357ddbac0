//! A fetched document, alive only between the response and the disk write.

use super::filename::{filename_from_disposition, synthesize_filename};

/// Bytes and headers of one downloaded document.
#[derive(Debug, Clone)]
pub struct DocumentResource {
    /// Opaque document identifier.
    pub id: String,
    pub content: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

impl DocumentResource {
    /// Output filename for this document.
    ///
    /// `sequence` is the class number, `index`/`total` locate the document
    /// among the class's documents and `title` is the class title.
    pub fn filename(&self, sequence: usize, index: usize, total: usize, title: &str) -> String {
        self.content_disposition
            .as_deref()
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| {
                synthesize_filename(
                    sequence,
                    index,
                    total,
                    title,
                    self.content_type.as_deref().unwrap_or_default(),
                )
            })
    }
}
