//! Error types shared across the crate.
//!
//! All fallible operations return this single [`Error`] enum. The binary is
//! the only place that turns an error into a process exit; the library just
//! propagates.

use crate::models::CollectionKind;
use reqwest::StatusCode;
use std::path::PathBuf;

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No server URL was supplied via flag or environment
    #[error("must specify the plex server")]
    MissingServer,
    /// The --debug filter did not compile as a regular expression
    #[error("invalid debug pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Connection-level failure from the HTTP client
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("request for {path} failed: {status}")]
    Status { path: String, status: StatusCode },
    /// The response body could not be parsed into the expected shape
    #[error("failed to decode response for {path}: {source}")]
    Decode {
        path: String,
        source: quick_xml::de::DeError,
    },
    /// No collection with the requested title exists on the server
    #[error("no such {kind}: {title}")]
    NotFound {
        kind: CollectionKind,
        title: String,
    },
    /// Writing an artwork file to disk failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
