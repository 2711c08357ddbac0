//! Error handling for the academy-dl library.
//!
//! This module provides centralized error handling for every stage of the
//! portal walk. Errors fall in two groups: the ones that end a run
//! (authentication and navigation failures) and the ones that only end a
//! branch (resolution and download failures, invalid selections). Callers
//! decide which group they are in by matching on the variant.

use std::io;
use thiserror::Error;

/// Errors that can happen when talking to the portal.
#[derive(Error, Debug)]
pub enum Error {
    /// The login heuristic was not met or the login request failed.
    ///
    /// This variant is fatal to the run: nothing below the login page can be
    /// reached without an authenticated session.
    #[error("Authentication failed (status {status}, url {url}): {reason}")]
    AuthenticationFailed {
        /// HTTP status of the login response, `0` when no response arrived.
        status: u16,
        /// URL the login request ended up at after redirects.
        url: String,
        /// What went wrong.
        reason: String,
    },

    /// Expected markup (table, anchors, options or container) was absent.
    ///
    /// The excerpt holds the beginning of the raw response so the drift in
    /// server markup can be diagnosed.
    #[error("Could not parse {stage}; raw markup starts with: {excerpt}")]
    NavigationParseFailed {
        /// Navigation stage that failed to parse.
        stage: &'static str,
        /// Leading part of the raw response body.
        excerpt: String,
    },

    /// An entity chosen for navigation carries no identifier.
    #[error("Selected {entity} '{label}' has no identifier; cannot proceed")]
    MissingIdentifier {
        /// Kind of entity, e.g. `subject` or `unit`.
        entity: &'static str,
        /// Display label of the entity.
        label: String,
    },

    /// No document identifiers could be resolved for a class.
    #[error("No documents found for class '{title}'")]
    ResolutionEmpty {
        /// Title of the class entry.
        title: String,
    },

    /// A single document could not be fetched or saved.
    #[error("Download of document {id} failed: {reason}")]
    DownloadFailed {
        /// Opaque document identifier.
        id: String,
        /// Human readable reason.
        reason: String,
    },

    /// A range expression produced no indices.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Error from the underlying URL parser or a malformed base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A configuration value cannot be used, e.g. a header value with
    /// control characters.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors raised while creating the
    /// destination directory or writing documents to disk.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Returns `true` when the error only affects one class or document and
    /// the caller may continue with the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ResolutionEmpty { .. } | Error::DownloadFailed { .. } | Error::InvalidSelection(_)
        )
    }
}

/// Result type alias for operations that can fail with an academy-dl error.
pub type Result<T> = std::result::Result<T, Error>;
