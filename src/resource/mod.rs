//! Resource abstraction layer
//!
//! Every PokeAPI endpoint is described once, in [`catalog`]. From there the
//! client gets both its typed accessors (`get::<Berry>`, `get_berry`) and
//! the by-name ones (`get_resource("berry", ..)`) that go through the
//! [`registry`].
//!
//! # Architecture
//!
//! - [`summary`] - Summary references and the page envelope
//! - [`registry`] - The [`Resource`] trait and the name -> descriptor index
//! - [`catalog`] - The resource table and the [`Record`] enum generated from it
//!
//! # Example
//!
//! ```no_run
//! use pokeapi::resource::{lookup, resource_names};
//!
//! for name in resource_names() {
//!     let descriptor = lookup(name).unwrap();
//!     println!("{} -> /{}/", descriptor.name, descriptor.path_segment);
//! }
//! ```

pub mod catalog;
pub mod registry;
pub mod summary;

pub use catalog::Record;
pub use registry::{
    get_registry, lookup, resource_names, Resource, ResourceDescriptor, ResourceKind,
};
pub use summary::{
    ApiResource, ApiResourceList, NamedApiResource, NamedApiResourceList, PaginatedList,
    ResourceRef, Summary,
};
