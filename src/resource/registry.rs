//! Resource Registry - map resource names to endpoints and decoders
//!
//! Every resource the client knows about has one [`ResourceDescriptor`],
//! generated from the table in [`catalog`](super::catalog). The registry
//! indexes them by name on first access and serves the by-name accessors.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::catalog::{Record, DESCRIPTORS};
use super::summary::{PaginatedList, ResourceRef, Summary};
use crate::api::{decode, ApiError};

/// Whether list entries for a resource carry a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Named,
    Unnamed,
}

/// A resource type the client can fetch.
///
/// `NAME` is the registry key and `PATH_SEGMENT` the URL segment. They
/// coincide for every PokeAPI resource but are kept apart so callers can
/// tell which one they mean.
pub trait Resource: DeserializeOwned + Serialize + Into<Record> + Send + 'static {
    const NAME: &'static str;
    const PATH_SEGMENT: &'static str;
    const KIND: ResourceKind;

    /// Element type of this resource's list endpoint
    type Summary: Summary + DeserializeOwned + Serialize + Into<ResourceRef> + Send + Sync + 'static;
}

/// Runtime description of one resource type
#[derive(Clone, Copy)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub path_segment: &'static str,
    pub kind: ResourceKind,
    decode_record: fn(&[u8]) -> Result<Record, ApiError>,
    decode_page: fn(&[u8]) -> Result<PaginatedList<ResourceRef>, ApiError>,
}

impl ResourceDescriptor {
    pub(super) const fn of<R: Resource>() -> Self {
        Self {
            name: R::NAME,
            path_segment: R::PATH_SEGMENT,
            kind: R::KIND,
            decode_record: decode_record::<R>,
            decode_page: decode_page::<R>,
        }
    }

    /// Decode a single record body
    pub fn decode(&self, body: &[u8]) -> Result<Record, ApiError> {
        (self.decode_record)(body)
    }

    /// Decode a list page body
    pub fn decode_list(&self, body: &[u8]) -> Result<PaginatedList<ResourceRef>, ApiError> {
        (self.decode_page)(body)
    }
}

impl fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("name", &self.name)
            .field("path_segment", &self.path_segment)
            .field("kind", &self.kind)
            .finish()
    }
}

fn decode_record<R: Resource>(body: &[u8]) -> Result<Record, ApiError> {
    decode::<R>(body).map(Into::into)
}

fn decode_page<R: Resource>(body: &[u8]) -> Result<PaginatedList<ResourceRef>, ApiError> {
    decode::<PaginatedList<R::Summary>>(body).map(|page| page.map(Into::into))
}

/// Global registry keyed by resource name
static REGISTRY: OnceLock<HashMap<&'static str, ResourceDescriptor>> = OnceLock::new();

/// Get the resource registry (built on first access)
pub fn get_registry() -> &'static HashMap<&'static str, ResourceDescriptor> {
    REGISTRY.get_or_init(|| {
        DESCRIPTORS
            .iter()
            .map(|descriptor| (descriptor.name, *descriptor))
            .collect()
    })
}

/// Get a resource descriptor by name
pub fn lookup(name: &str) -> Result<&'static ResourceDescriptor, ApiError> {
    get_registry()
        .get(name)
        .ok_or_else(|| ApiError::UnknownResource(name.to_string()))
}

/// All resource names, sorted (for help output and completion)
pub fn resource_names() -> Vec<&'static str> {
    let mut names: Vec<_> = get_registry().keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Berry, Machine};

    #[test]
    fn test_registry_has_every_resource() {
        assert_eq!(get_registry().len(), 48);
        assert_eq!(DESCRIPTORS.len(), 48, "no duplicate names in the catalog");
    }

    #[test]
    fn test_lookup_berry() {
        let descriptor = lookup("berry").unwrap();
        assert_eq!(descriptor.path_segment, "berry");
        assert_eq!(descriptor.kind, ResourceKind::Named);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let err = lookup("digimon").unwrap_err();
        assert_eq!(err, ApiError::UnknownResource("digimon".to_string()));
    }

    #[test]
    fn test_unnamed_resources() {
        let unnamed: Vec<_> = resource_names()
            .into_iter()
            .filter(|name| lookup(name).unwrap().kind == ResourceKind::Unnamed)
            .collect();
        assert_eq!(
            unnamed,
            vec![
                "characteristic",
                "contest-effect",
                "evolution-chain",
                "machine",
                "super-contest-effect"
            ]
        );
    }

    #[test]
    fn test_resource_names_sorted() {
        let names = resource_names();
        assert_eq!(names.first(), Some(&"ability"));
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(names.contains(&"pokemon-species"));
        assert!(names.contains(&"type"));
    }

    #[test]
    fn test_descriptor_matches_static_resource() {
        assert_eq!(lookup(Berry::NAME).unwrap().path_segment, Berry::PATH_SEGMENT);
        assert_eq!(lookup(Machine::NAME).unwrap().kind, Machine::KIND);
    }

    #[test]
    fn test_decode_list_keeps_names_for_named_resources() {
        let body = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "cheri", "url": "https://pokeapi.co/api/v2/berry/1/"},
                {"name": "chesto", "url": "https://pokeapi.co/api/v2/berry/2/"}
            ]
        }"#;

        let page = lookup("berry").unwrap().decode_list(body.as_bytes()).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results[1].name.as_deref(), Some("chesto"));
        assert_eq!(page.results[1].id(), Some(2));
    }

    #[test]
    fn test_decode_list_unnamed_resources() {
        let body = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"url": "https://pokeapi.co/api/v2/machine/1/"}]
        }"#;

        let page = lookup("machine").unwrap().decode_list(body.as_bytes()).unwrap();
        assert_eq!(page.results[0].name, None);
        assert_eq!(page.results[0].category(), Some("machine"));
    }

    #[test]
    fn test_decode_record_failure_is_decode_error() {
        let err = lookup("berry").unwrap().decode(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
