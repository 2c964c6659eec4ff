//! Blocking PokeAPI client
//!
//! Same accessors, same URLs, same errors as the async
//! [`PokeApi`](super::PokeApi); each call blocks the calling thread until
//! the response is decoded. The client drives the async core on a private
//! single-threaded runtime, so it must not be created or dropped from
//! inside another tokio runtime.

use tokio::runtime::{Builder, Runtime};

use super::client::{ClientConfig, ConfigError, PokeApi as AsyncPokeApi};
use super::error::ApiError;
use super::http::{ReqwestTransport, Transport};
use crate::model::LocationAreaEncounter;
use crate::resource::{PaginatedList, Record, Resource, ResourceRef, Summary};

#[derive(Debug)]
pub struct PokeApi<T: Transport = ReqwestTransport> {
    inner: AsyncPokeApi<T>,
    runtime: Runtime,
}

impl PokeApi<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::from_async(AsyncPokeApi::new(config)?)
    }
}

impl<T: Transport> PokeApi<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, ConfigError> {
        Self::from_async(AsyncPokeApi::with_transport(config, transport))
    }

    /// Wrap an async client. The transport is shared with `inner`.
    pub fn from_async(inner: AsyncPokeApi<T>) -> Result<Self, ConfigError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ConfigError::Runtime(e.to_string()))?;

        Ok(Self { inner, runtime })
    }

    /// The async client this one drives
    pub fn as_async(&self) -> &AsyncPokeApi<T> {
        &self.inner
    }

    pub fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        self.runtime.block_on(self.inner.get::<R>(id))
    }

    pub fn get_list<R: Resource>(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<PaginatedList<R::Summary>, ApiError> {
        self.runtime.block_on(self.inner.get_list::<R>(offset, limit))
    }

    pub fn get_resource(&self, name: &str, id: i64) -> Result<Record, ApiError> {
        self.runtime.block_on(self.inner.get_resource(name, id))
    }

    pub fn get_resource_list(
        &self,
        name: &str,
        offset: i64,
        limit: i64,
    ) -> Result<PaginatedList<ResourceRef>, ApiError> {
        self.runtime
            .block_on(self.inner.get_resource_list(name, offset, limit))
    }

    pub fn follow<R: Resource, S: Summary + ?Sized>(&self, summary: &S) -> Result<R, ApiError> {
        self.runtime.block_on(self.inner.follow::<R, S>(summary))
    }

    pub fn get_pokemon_encounters(&self, id: i64) -> Result<Vec<LocationAreaEncounter>, ApiError> {
        self.runtime.block_on(self.inner.get_pokemon_encounters(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RawResponse, TransportError};
    use std::sync::Mutex;
    use url::Url;

    /// Records requested URLs and answers every request with the same response
    struct CannedTransport {
        response: RawResponse,
        requests: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: RawResponse::new(status, body),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(url.to_string());
            Ok(self.response.clone())
        }
    }

    #[test]
    fn blocking_get_returns_decoded_record() {
        let body = include_str!("../../tests/fixtures/berry-10.json");
        let api =
            PokeApi::with_transport(&ClientConfig::default(), CannedTransport::new(200, body))
                .unwrap();

        let berry = api.get_berry(10).unwrap();
        assert_eq!(berry.name, "sitrus");
        assert_eq!(
            *api.as_async().transport().requests.lock().unwrap(),
            vec!["https://pokeapi.co/api/v2/berry/10/".to_string()]
        );
    }

    #[test]
    fn blocking_not_found() {
        let api = PokeApi::with_transport(
            &ClientConfig::default(),
            CannedTransport::new(404, "Not Found"),
        )
        .unwrap();

        assert_eq!(api.get_move(-1).unwrap_err(), ApiError::NotFound);
    }

    #[test]
    fn blocking_encounters_url() {
        let api =
            PokeApi::with_transport(&ClientConfig::default(), CannedTransport::new(200, "[]"))
                .unwrap();

        assert!(api.get_pokemon_encounters(25).unwrap().is_empty());
        assert_eq!(
            *api.as_async().transport().requests.lock().unwrap(),
            vec!["https://pokeapi.co/api/v2/pokemon/25/encounters".to_string()]
        );
    }
}
