//! Progress module containing progress bar styling.
//!
//! Downloads surface incremental byte counts through [`indicatif`] bars
//! configured by [`StyleOptions`]. Use [`ProgressBarOpts::hidden`] (or
//! [`PortalClientBuilder::hidden`](crate::portal::PortalClientBuilder::hidden))
//! when no terminal is attached.

pub(crate) mod style;

pub use style::{ProgressBarOpts, StyleOptions};
