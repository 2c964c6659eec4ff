//! PokeAPI client
//!
//! Builds request URLs, runs them through a [`Transport`] and hands the raw
//! response to the classification and decoding functions in
//! [`error`](super::error). Every method performs exactly one request.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::error::{check_status, decode, ApiError, TransportError};
use super::http::{ReqwestTransport, Transport};
use super::pending::PendingCall;
use crate::model::LocationAreaEncounter;
use crate::resource::{self, PaginatedList, Record, Resource, ResourceRef, Summary};

/// Root of the public API
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("pokeapi-rs/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing a client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to start runtime: {0}")]
    Runtime(String),
}

/// Client construction options
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        // Parsing a literal; `default_config_values` pins the result.
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the API root. Trailing slashes, query and fragment are dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }

        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        self.base_url = url;
        Ok(self)
    }

    /// Per-request timeout covering connect, send and body read
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Async PokeAPI client.
///
/// Cheap to clone; clones share the transport. Calls are independent of
/// each other and may complete in any order.
pub struct PokeApi<T: Transport = ReqwestTransport> {
    base_url: Url,
    transport: Arc<T>,
}

impl<T: Transport> Clone for PokeApi<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for PokeApi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PokeApi")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PokeApi<ReqwestTransport> {
    /// Create a client backed by reqwest
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.user_agent(), config.timeout())?;
        Ok(Self::with_transport(&config, transport))
    }
}

impl Default for PokeApi<ReqwestTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default()).expect("Failed to create default PokeAPI client")
    }
}

impl<T: Transport> PokeApi<T> {
    /// Create a client over a custom transport. Only the base URL of
    /// `config` is used; timeout and user agent belong to the transport.
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.clone(),
            transport: Arc::new(transport),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // URL helpers
    // =========================================================================

    fn endpoint_url(&self, segments: &[&str], trailing_slash: bool) -> Url {
        let mut url = self.base_url.clone();
        let mut path = url.path().trim_end_matches('/').to_string();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        if trailing_slash {
            path.push('/');
        }
        url.set_path(&path);
        url
    }

    /// `{base}/{segment}/{id}/`
    pub fn resource_url(&self, segment: &str, id: i64) -> Url {
        self.endpoint_url(&[segment, &id.to_string()], true)
    }

    /// `{base}/{segment}/?offset={offset}&limit={limit}`
    ///
    /// Values are passed through as given; the server validates them.
    pub fn list_url(&self, segment: &str, offset: i64, limit: i64) -> Url {
        let mut url = self.endpoint_url(&[segment], true);
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        url
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    async fn fetch(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self.transport.get(&url).await?;
        check_status(response)
    }

    /// Fetch one record by id
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        let body = self.fetch(self.resource_url(R::PATH_SEGMENT, id)).await?;
        decode(&body)
    }

    /// Fetch one page of summaries
    pub async fn get_list<R: Resource>(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<PaginatedList<R::Summary>, ApiError> {
        let body = self
            .fetch(self.list_url(R::PATH_SEGMENT, offset, limit))
            .await?;
        decode(&body)
    }

    /// Fetch one record of a resource known only by its registry name
    pub async fn get_resource(&self, name: &str, id: i64) -> Result<Record, ApiError> {
        let descriptor = resource::lookup(name)?;
        let body = self
            .fetch(self.resource_url(descriptor.path_segment, id))
            .await?;
        descriptor.decode(&body)
    }

    /// Fetch one page of a resource known only by its registry name
    pub async fn get_resource_list(
        &self,
        name: &str,
        offset: i64,
        limit: i64,
    ) -> Result<PaginatedList<ResourceRef>, ApiError> {
        let descriptor = resource::lookup(name)?;
        let body = self
            .fetch(self.list_url(descriptor.path_segment, offset, limit))
            .await?;
        descriptor.decode_list(&body)
    }

    /// Fetch the record a summary points at.
    ///
    /// The request goes to this client's base URL, not to the host in the
    /// summary's URL.
    pub async fn follow<R: Resource, S: Summary + ?Sized>(&self, summary: &S) -> Result<R, ApiError> {
        match (summary.category(), summary.id()) {
            (Some(category), Some(id)) if category == R::PATH_SEGMENT => self.get::<R>(id).await,
            _ => Err(ApiError::Decode(format!(
                "{} does not point at a {} resource",
                summary.url(),
                R::NAME
            ))),
        }
    }

    /// Locations where a Pokémon can be encountered in the wild
    pub async fn get_pokemon_encounters(
        &self,
        id: i64,
    ) -> Result<Vec<LocationAreaEncounter>, ApiError> {
        let url = self.endpoint_url(&["pokemon", &id.to_string(), "encounters"], false);
        let body = self.fetch(url).await?;
        decode(&body)
    }

    // =========================================================================
    // Scheduled calls
    // =========================================================================

    /// Schedule a call on the tokio executor right away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<O, F, Fut>(&self, call: F) -> PendingCall<O>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Result<O, ApiError>> + Send + 'static,
        O: Send + 'static,
    {
        PendingCall::new(tokio::spawn(call(self.clone())))
    }

    pub fn spawn_get<R: Resource>(&self, id: i64) -> PendingCall<R> {
        self.spawn(move |api| async move { api.get::<R>(id).await })
    }

    pub fn spawn_get_list<R: Resource>(
        &self,
        offset: i64,
        limit: i64,
    ) -> PendingCall<PaginatedList<R::Summary>> {
        self.spawn(move |api| async move { api.get_list::<R>(offset, limit).await })
    }
}
