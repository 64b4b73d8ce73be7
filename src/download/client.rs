//! HTTP client for fetching bodies and downloading files.
//!
//! This module provides the [`HttpClient`] struct which builds outbound
//! requests from a [`RequestSpec`], executes them through an injectable
//! transport, and streams response bodies to disk.

use std::path::Path;
use std::sync::Arc;

use futures_util::StreamExt;
use indicatif::HumanBytes;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, COOKIE, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Method, Request, Response};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};
use url::Url;

use super::error::DownloadError;
use super::request::RequestSpec;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::user_agent;

/// HTTP client for fetching resources and downloading them to files.
///
/// This client is designed to be created once and reused for multiple
/// sequential calls; the default transport shares one `reqwest` connection
/// pool. The User-Agent is an explicit field — there is no process-wide
/// mutable configuration.
///
/// # Example
///
/// ```no_run
/// use filefetch::{HttpClient, RequestSpec};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let spec = RequestSpec::new("https://example.com/file.bin");
/// let bytes = client.download_to_file(Path::new("./file.bin"), &spec).await?;
/// println!("wrote {bytes} bytes");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    transport: Arc<dyn HttpTransport>,
    user_agent: String,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a client with the default transport and User-Agent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client with the default transport and a custom User-Agent.
    #[must_use]
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self::with_transport_and_user_agent(Arc::new(ReqwestTransport::new()), user_agent)
    }

    /// Creates a client over a custom transport with the default User-Agent.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_transport_and_user_agent(transport, user_agent::default_user_agent())
    }

    /// Creates a client over a custom transport and User-Agent.
    #[must_use]
    pub fn with_transport_and_user_agent(
        transport: Arc<dyn HttpTransport>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            user_agent: user_agent.into(),
        }
    }

    /// The User-Agent sent when the spec does not override it.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Executes the request and returns the raw response body.
    ///
    /// Status codes are not interpreted: a 404 still returns whatever body
    /// the server sent. The response is fully consumed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::RequestConstruction`] for a malformed URL or
    /// header, [`DownloadError::Network`] on transport or body-read failure.
    #[instrument(skip(self, spec), fields(url = %spec.url()))]
    pub async fn fetch_body(&self, spec: &RequestSpec) -> Result<Vec<u8>, DownloadError> {
        let response = self.execute(spec).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::network(spec.url(), e))?;
        Ok(bytes.to_vec())
    }

    /// Executes the request and returns the full response without consuming
    /// the body.
    ///
    /// The caller owns the response; dropping it releases the connection.
    ///
    /// # Errors
    ///
    /// Same error semantics as [`fetch_body`](Self::fetch_body).
    #[instrument(skip(self, spec), fields(url = %spec.url()))]
    pub async fn fetch_response(&self, spec: &RequestSpec) -> Result<Response, DownloadError> {
        self.execute(spec).await
    }

    /// Downloads to `dest`, skipping the transfer when the local file size
    /// already matches the remote `Content-Length`.
    ///
    /// The remote size comes from a preliminary request built from the same
    /// spec (same GET method, same headers and cookies); its body is dropped
    /// unread. When the preliminary request fails, or the header is absent
    /// or unparseable, a full download is assumed to be needed.
    ///
    /// Returns the number of bytes written; 0 means the download was
    /// skipped. The size comparison is a heuristic, not a content check:
    /// a same-size file with different bytes is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::LocalIo`] when the existing file's size
    /// cannot be read, and the [`force_download`](Self::force_download)
    /// errors otherwise.
    #[must_use = "the byte count distinguishes a skip (0) from a download"]
    #[instrument(skip(self, spec), fields(url = %spec.url(), path = %dest.display()))]
    pub async fn download_to_file(
        &self,
        dest: &Path,
        spec: &RequestSpec,
    ) -> Result<u64, DownloadError> {
        if !file_exists(dest).await {
            // Nothing on disk, don't bother probing
            return self.force_download(dest, spec).await;
        }

        let Some(remote_len) = self.probe_content_length(spec).await else {
            return self.force_download(dest, spec).await;
        };

        let local_len = tokio::fs::metadata(dest)
            .await
            .map_err(|e| DownloadError::local_io(dest, e))?
            .len();

        if local_len == remote_len {
            debug!(bytes = remote_len, "local size matches advertised length");
            println!("Skipping {} ({})", display_name(dest), HumanBytes(remote_len));
            return Ok(0);
        }

        self.force_download(dest, spec).await
    }

    /// Downloads unconditionally, overwriting `dest`.
    ///
    /// An existing destination is truncated; a missing one is created along
    /// with any missing parent directories. The body is streamed through a
    /// buffered writer, never held in memory whole. Returns the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Network`] when the request or a body chunk
    /// fails, [`DownloadError::LocalIo`] when the file cannot be created,
    /// written, or flushed.
    #[must_use = "the byte count is the only record of what was written"]
    #[instrument(skip(self, spec), fields(url = %spec.url(), path = %dest.display()))]
    pub async fn force_download(
        &self,
        dest: &Path,
        spec: &RequestSpec,
    ) -> Result<u64, DownloadError> {
        let response = self.execute(spec).await?;

        debug!(status = response.status().as_u16(), "response received");
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            debug!(content_type, "response content type");
        }

        // Advertised length only shapes the progress message on this path.
        let advertised = content_length_of(&response);
        if advertised.is_none() {
            debug!(url = spec.url(), "no usable Content-Length header");
        }

        let file = open_destination(dest).await?;

        match advertised {
            Some(bytes) => println!(
                "Downloading {} ({})",
                display_name(dest),
                HumanBytes(bytes)
            ),
            None => println!("Downloading {} (unknown size)", display_name(dest)),
        }

        stream_to_file(file, response, spec.url(), dest).await
    }

    /// Builds the outbound GET request: default User-Agent first, then the
    /// rendered cookie header, then header overrides so a supplied header
    /// replaces any default of the same name.
    fn build_request(&self, spec: &RequestSpec) -> Result<Request, DownloadError> {
        let url = Url::parse(spec.url())
            .map_err(|e| DownloadError::request_construction(spec.url(), e))?;
        let mut request = Request::new(Method::GET, url);
        let headers = request.headers_mut();

        let ua_value = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| DownloadError::request_construction(spec.url(), e))?;
        headers.insert(USER_AGENT, ua_value);

        if let Some(cookie_header) = spec.cookie_header() {
            let cookie_value = HeaderValue::from_str(&cookie_header)
                .map_err(|e| DownloadError::request_construction(spec.url(), e))?;
            headers.insert(COOKIE, cookie_value);
        }

        for (name, value) in spec.header_overrides() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| DownloadError::request_construction(spec.url(), e))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| DownloadError::request_construction(spec.url(), e))?;
            headers.insert(header_name, header_value);
        }

        Ok(request)
    }

    async fn execute(&self, spec: &RequestSpec) -> Result<Response, DownloadError> {
        let request = self.build_request(spec)?;
        self.transport
            .execute(request)
            .await
            .map_err(|e| DownloadError::network(spec.url(), e))
    }

    /// Issues the preliminary request and reads its `Content-Length`.
    ///
    /// `None` means the remote size is unknown — the caller falls back to an
    /// unconditional download rather than treating it as an error.
    async fn probe_content_length(&self, spec: &RequestSpec) -> Option<u64> {
        let response = match self.execute(spec).await {
            Ok(response) => response,
            Err(error) => {
                debug!(error = %error, "size probe failed; assuming download needed");
                return None;
            }
        };

        let length = content_length_of(&response);
        if length.is_none() {
            debug!("size probe returned no parseable Content-Length");
        }
        // Response dropped here with the body unread.
        length
    }
}

/// Checks whether a file already exists on disk.
pub async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Reads the `Content-Length` header as a non-negative integer.
fn content_length_of(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
}

/// Filename shown in progress messages.
fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Opens `dest` for writing: truncates an existing file, otherwise creates
/// it after creating any missing parent directories.
async fn open_destination(dest: &Path) -> Result<File, DownloadError> {
    if file_exists(dest).await {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(dest)
            .await
            .map_err(|e| DownloadError::local_io(dest, e))
    } else {
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::local_io(parent, e))?;
        }
        File::create(dest)
            .await
            .map_err(|e| DownloadError::local_io(dest, e))
    }
}

/// Streams the response body to the file, returning bytes written.
async fn stream_to_file(
    file: File,
    response: Response,
    url: &str,
    path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::local_io(path, e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::local_io(path, e))?;

    Ok(bytes_written)
}
