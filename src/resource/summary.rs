//! Resource summaries and the page envelope
//!
//! PokeAPI never inlines related records; it links them with a summary
//! object holding a URL (and a name for named resources). List endpoints
//! return pages of the same summaries.

use serde::{Deserialize, Serialize};

/// Anything that points at a single resource by URL.
///
/// The id and category are parsed from the trailing `/{category}/{id}/` of
/// the URL, e.g. `https://pokeapi.co/api/v2/berry/10/` -> (`berry`, 10).
pub trait Summary {
    fn url(&self) -> &str;

    /// Numeric id of the referenced resource
    fn id(&self) -> Option<i64> {
        split_resource_url(self.url()).map(|(_, id)| id)
    }

    /// Path segment of the referenced resource, e.g. `"berry"`
    fn category(&self) -> Option<&str> {
        split_resource_url(self.url()).map(|(category, _)| category)
    }
}

/// Reference to a named resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

impl NamedApiResource {
    pub fn new(name: impl Into<String>, category: &str, id: i64) -> Self {
        Self {
            name: name.into(),
            url: resource_path(category, id),
        }
    }
}

impl Summary for NamedApiResource {
    fn url(&self) -> &str {
        &self.url
    }
}

/// Reference to an unnamed resource (machines, evolution chains, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

impl ApiResource {
    pub fn new(category: &str, id: i64) -> Self {
        Self {
            url: resource_path(category, id),
        }
    }
}

impl Summary for ApiResource {
    fn url(&self) -> &str {
        &self.url
    }
}

/// Summary with the name erased to an option, used where the resource is
/// only known by its registry name at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub url: String,
}

impl Summary for ResourceRef {
    fn url(&self) -> &str {
        &self.url
    }
}

impl From<NamedApiResource> for ResourceRef {
    fn from(resource: NamedApiResource) -> Self {
        Self {
            name: Some(resource.name),
            url: resource.url,
        }
    }
}

impl From<ApiResource> for ResourceRef {
    fn from(resource: ApiResource) -> Self {
        Self {
            name: None,
            url: resource.url,
        }
    }
}

/// One page of a list endpoint.
///
/// `results` keeps the server's order; nothing is filtered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    /// Total number of resources behind this endpoint
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedList<T> {
    /// Convert every element, preserving order and the envelope fields
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedList<U> {
        PaginatedList {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

pub type NamedApiResourceList = PaginatedList<NamedApiResource>;
pub type ApiResourceList = PaginatedList<ApiResource>;

fn resource_path(category: &str, id: i64) -> String {
    format!("/api/v2/{category}/{id}/")
}

/// Split `.../{category}/{id}/` into its two trailing segments
fn split_resource_url(url: &str) -> Option<(&str, i64)> {
    let mut segments = url.trim_end_matches('/').rsplit('/');
    let id = segments.next()?.parse().ok()?;
    let category = segments.next().filter(|c| !c.is_empty())?;
    Some((category, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absolute_url() {
        let berry = NamedApiResource {
            name: "sitrus".to_string(),
            url: "https://pokeapi.co/api/v2/berry/10/".to_string(),
        };
        assert_eq!(berry.id(), Some(10));
        assert_eq!(berry.category(), Some("berry"));
    }

    #[test]
    fn parses_url_without_trailing_slash() {
        let chain = ApiResource {
            url: "https://pokeapi.co/api/v2/evolution-chain/5".to_string(),
        };
        assert_eq!(chain.id(), Some(5));
        assert_eq!(chain.category(), Some("evolution-chain"));
    }

    #[test]
    fn constructed_summaries_round_trip() {
        let firmness = NamedApiResource::new("very-hard", "berry-firmness", 4);
        assert_eq!(firmness.url, "/api/v2/berry-firmness/4/");
        assert_eq!(firmness.id(), Some(4));
        assert_eq!(firmness.category(), Some("berry-firmness"));

        let machine = ApiResource::new("machine", 12);
        assert_eq!(machine.id(), Some(12));
        assert_eq!(machine.category(), Some("machine"));
    }

    #[test]
    fn malformed_urls_yield_none() {
        let bad = ApiResource {
            url: "https://pokeapi.co/api/v2/berry/".to_string(),
        };
        assert_eq!(bad.id(), None);
        assert_eq!(bad.category(), None);

        let bare = ApiResource {
            url: "42".to_string(),
        };
        assert_eq!(bare.id(), None);
    }

    #[test]
    fn map_keeps_envelope_and_order() {
        let page = NamedApiResourceList {
            count: 64,
            next: Some("https://pokeapi.co/api/v2/berry/?offset=2&limit=2".to_string()),
            previous: None,
            results: vec![
                NamedApiResource::new("cheri", "berry", 1),
                NamedApiResource::new("chesto", "berry", 2),
            ],
        };

        let erased = page.clone().map(ResourceRef::from);
        assert_eq!(erased.count, 64);
        assert!(erased.has_next());
        assert_eq!(erased.results[0].name.as_deref(), Some("cheri"));
        assert_eq!(erased.results[1].id(), Some(2));
    }

    #[test]
    fn named_list_rejects_missing_name() {
        let body = r#"{"count":1,"next":null,"previous":null,"results":[{"url":"/api/v2/berry/1/"}]}"#;
        assert!(serde_json::from_str::<NamedApiResourceList>(body).is_err());
        assert!(serde_json::from_str::<ApiResourceList>(body).is_ok());
    }
}
