//! Injectable HTTP transport behind [`crate::HttpClient`].
//!
//! The client depends on an interface over "can execute an HTTP request"
//! rather than on reqwest directly, so tests substitute fakes for network
//! edge cases a real server cannot cleanly produce (garbled headers,
//! transport failures on specific calls).

use async_trait::async_trait;
use reqwest::{Client, Request, Response};

/// Boxed error type crossing the transport boundary.
///
/// Boxing keeps the trait object-safe for arbitrary implementations while
/// preserving the source chain on [`super::DownloadError`].
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Executes fully built HTTP requests.
///
/// One request at a time: implementations are only ever awaited to
/// completion before the next call is issued.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Executes the request and returns the response with its body unread.
    ///
    /// # Errors
    ///
    /// Returns a transport-level error (connection, DNS, TLS) — never an
    /// HTTP status: non-2xx responses are returned as responses.
    async fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

/// Default transport backed by a shared `reqwest::Client`.
///
/// The inner client owns the connection pool and is reused across
/// sequential calls. Gzip decompression is enabled; no timeouts are set
/// beyond reqwest's own defaults.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates the default transport.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let client = Client::builder()
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Wraps an already configured `reqwest::Client`.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest client.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<Response, TransportError> {
        Ok(self.client.execute(request).await?)
    }
}
