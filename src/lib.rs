//! Typed client for the PokeAPI REST service.
//!
//! Every resource the service exposes can be fetched by id or listed a page
//! at a time, either with the async [`PokeApi`] or the
//! [`blocking::PokeApi`]. Responses decode into the structs in [`model`].
//!
//! ```no_run
//! # async fn run() -> Result<(), pokeapi::ApiError> {
//! let api: pokeapi::PokeApi = Default::default();
//!
//! let berry = api.get_berry(10).await?;
//! assert_eq!(berry.name, "sitrus");
//!
//! let page = api.get_berry_list(0, 20).await?;
//! for summary in &page.results {
//!     println!("{}", summary.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod model;
pub mod resource;

pub use api::blocking;
pub use api::{
    ApiError, ClientConfig, ConfigError, PendingCall, PokeApi, RawResponse, ReqwestTransport,
    Transport, TransportError,
};
pub use resource::{
    lookup, resource_names, ApiResource, NamedApiResource, PaginatedList, Record, Resource,
    ResourceDescriptor, ResourceKind, ResourceRef, Summary,
};
