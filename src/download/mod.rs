//! HTTP fetch and file download operations.
//!
//! This module provides the [`HttpClient`] used for all outbound requests,
//! the [`RequestSpec`] descriptor (URL, header overrides, cookies), and the
//! conditional file download that skips work when the local file size
//! already matches the remote `Content-Length`.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large files)
//! - Size-only skip heuristic for already-downloaded files
//! - Per-request header overrides and ordered cookies
//! - Structured error types with full context
//! - Injectable transport for tests
//!
//! # Example
//!
//! ```no_run
//! use filefetch::{HttpClient, RequestSpec};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let spec = RequestSpec::new("https://example.com/data.bin")
//!     .header("Accept", "application/octet-stream")
//!     .cookie("session", "abc123");
//! let bytes = client
//!     .download_to_file(Path::new("./downloads/data.bin"), &spec)
//!     .await?;
//! println!("wrote {bytes} bytes");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod request;
mod transport;

pub use client::{HttpClient, file_exists};
pub use error::DownloadError;
pub use request::{Cookie, RequestSpec};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
