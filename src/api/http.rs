//! HTTP transport for PokeAPI calls
//!
//! The accessors only need one thing from the network: GET a URL, get back
//! a status and the raw body bytes. [`Transport`] is that seam. [`ReqwestTransport`]
//! is the production implementation; tests plug in in-memory transports.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::error::TransportError;

/// Status code and body of a completed HTTP exchange.
///
/// The body is kept as bytes; it is only interpreted as UTF-8 while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single GET request.
///
/// Implementations must not retry and must not interpret the status code;
/// classification happens in [`check_status`](super::error::check_status).
pub trait Transport: Send + Sync + 'static {
    fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given user agent and optional per-request timeout
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
