//! Download module containing document-related functionality.
//!
//! - [`resource`] - the fetched [`DocumentResource`]
//! - [`filename`] - output filename resolution from response headers or class metadata
//! - [`summary`] - per-class result tracking and status reporting
//!
//! The network side of downloading lives on
//! [`PortalClient::download_all`](crate::portal::PortalClient::download_all),
//! which needs the authenticated session.
//!
//! # Examples
//!
//! ```rust
//! use academy_dl::download::{filename_from_disposition, synthesize_filename};
//!
//! assert_eq!(
//!     filename_from_disposition("attachment; filename*=UTF-8''Unit%201.pdf").as_deref(),
//!     Some("Unit 1.pdf")
//! );
//! assert_eq!(
//!     synthesize_filename(1, 1, 1, "Intro to Sets", "application/pdf"),
//!     "01_Intro_to_Sets.pdf"
//! );
//! ```

pub mod filename;
pub mod resource;
pub mod summary;

pub use filename::{
    extension_for_content_type, filename_from_disposition, slugify, synthesize_filename,
};
pub use resource::DocumentResource;
pub use summary::{Status, Summary};
