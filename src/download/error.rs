//! Error types for the download module.
//!
//! This module defines structured errors for all fetch and download
//! operations, providing context-rich error messages for debugging and
//! user feedback.

use std::path::PathBuf;

use thiserror::Error;

use super::transport::TransportError;

/// Errors that can occur while building requests, fetching, or writing files.
///
/// Status codes are deliberately NOT an error kind: a 404 response is
/// returned to the caller like any other response, body and all.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The URL, a header name, or a header value cannot be turned into a
    /// valid outbound request.
    #[error("cannot build request for {url}: {source}")]
    RequestConstruction {
        /// The URL the request was being built for.
        url: String,
        /// The underlying construction error.
        #[source]
        source: TransportError,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors,
    /// transport failure, or a failed body read).
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: TransportError,
    },

    /// File system error during download (stat, create, write, flush).
    #[error("IO error at {path}: {source}")]
    LocalIo {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Creates a request construction error.
    pub fn request_construction(url: impl Into<String>, source: impl Into<TransportError>) -> Self {
        Self::RequestConstruction {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates a network error.
    pub fn network(url: impl Into<String>, source: impl Into<TransportError>) -> Self {
        Self::Network {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Creates a local IO error.
    pub fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::LocalIo {
            path: path.into(),
            source,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>` impls: every variant
// requires context (url, path) that the source errors don't carry. The
// helper constructors are the supported way to attach it.
