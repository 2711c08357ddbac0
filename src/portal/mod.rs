//! Portal module containing the client, its builder and configuration.
//!
//! [`PortalClient`] owns the session and implements every portal operation:
//!
//! - login and anti-forgery token refresh (`client`)
//! - semester, subject, unit and class listings (`navigator`)
//! - resolution of a class entry into document ids (`resolver`)
//! - document downloads and per-class batches (`downloader`)
//!
//! # Examples
//!
//! ```rust,no_run
//! use academy_dl::portal::PortalClientBuilder;
//! use academy_dl::utils::parse_range;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), academy_dl::Error> {
//! let mut client = PortalClientBuilder::new().build()?;
//! client.login("user", "password").await?;
//!
//! let semesters = client.list_semesters().await?;
//! let subjects = client.list_subjects(&semesters[0].id).await?;
//! let course_id = subjects.items[0].require_course_id()?;
//! let units = client.list_units(course_id).await?;
//! let classes = client.list_classes(units[0].require_unit_id()?).await?;
//!
//! let selection = parse_range("-", classes.len());
//! let summaries = client
//!     .download_classes(&classes.items, &selection, Path::new("downloads"))
//!     .await;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod config;
mod downloader;
mod navigator;
mod resolver;

pub use builder::PortalClientBuilder;
pub use client::PortalClient;
pub use config::PortalConfig;
