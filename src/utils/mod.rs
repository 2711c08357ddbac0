//! Shared utility functions.
//!
//! - [`range`] - range expressions selecting items from a listing
//! - [`content_length`] - response header helpers for downloads

pub mod content_length;
pub mod range;

pub use content_length::{expected_length, header_string};
pub use range::{parse_range, select_range};
