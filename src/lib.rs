//! Academy-dl is a crate for browsing and downloading course material from
//! the PESU Academy student portal.
//!
//! It logs in with a student's credentials, walks the portal's
//! semester → subject → unit → class hierarchy by scraping the HTML
//! fragments the portal serves, resolves each class into document
//! identifiers and saves the documents to disk.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use academy_dl::{select_range, Error, PortalClientBuilder};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let mut client = PortalClientBuilder::new().build()?;
//! client.login("PES1UG20CS001", "secret").await?;
//!
//! let semesters = client.list_semesters().await?;
//! let subjects = client.list_subjects(&semesters[0].id).await?;
//! let units = client.list_units(subjects.items[0].require_course_id()?).await?;
//! let classes = client.list_classes(units[0].require_unit_id()?).await?;
//!
//! let selection = select_range("1-3", classes.len())?;
//! for summary in client
//!     .download_classes(&classes.items, &selection, Path::new("downloads"))
//!     .await
//! {
//!     println!("{} {:?}", summary.title(), summary.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`portal`] - The `PortalClient`, its builder and configuration
//! - [`session`] - Cookie-backed session state, token extraction and the login heuristic
//! - [`extract`] - HTML extractors for each navigation level
//! - [`resolve`] - Tiered resolution of class entries into document ids
//! - [`download`] - Fetched documents, filename resolution and per-class summaries
//! - [`model`] - Semesters, subjects, units and class entries
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction and portal endpoints
//! - [`progress`] - Progress bar styling
//! - [`utils`] - Range selection and header helpers

pub mod download;
pub mod error;
pub mod extract;
pub mod http;
pub mod model;
pub mod portal;
pub mod progress;
pub mod resolve;
pub mod session;
pub mod utils;

pub use download::{DocumentResource, Status, Summary};
pub use error::{Error, Result};
pub use model::{ClassArgs, ClassEntry, Listing, Semester, Subject, Unit};
pub use portal::{PortalClient, PortalClientBuilder, PortalConfig};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use session::Session;
pub use utils::{parse_range, select_range};
