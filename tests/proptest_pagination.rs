//! Property-based tests using proptest
//!
//! These tests run the blocking client over in-memory transports and check
//! pagination windows, status classification and parameter pass-through
//! with randomized inputs.

use std::collections::HashMap;
use std::sync::Mutex;

use pokeapi::blocking::PokeApi;
use pokeapi::model::Berry;
use pokeapi::{ApiError, ClientConfig, RawResponse, Transport, TransportError};
use proptest::prelude::*;
use serde_json::json;
use url::Url;

/// Serves list pages over a fixed, ordered set of berry names
struct BerryCatalog {
    names: Vec<String>,
}

impl BerryCatalog {
    fn page(&self, offset: i64, limit: i64) -> serde_json::Value {
        let len = self.names.len() as i64;
        let start = offset.clamp(0, len);
        let end = offset.saturating_add(limit).clamp(start, len);

        let results: Vec<_> = (start..end)
            .map(|i| {
                json!({
                    "name": self.names[i as usize],
                    "url": format!("https://pokeapi.co/api/v2/berry/{}/", i + 1),
                })
            })
            .collect();

        json!({
            "count": len,
            "next": if end < len { Some(format!("/api/v2/berry/?offset={end}&limit={limit}")) } else { None },
            "previous": None::<String>,
            "results": results,
        })
    }
}

impl Transport for BerryCatalog {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        let parse = |key: &str| {
            params
                .get(key)
                .and_then(|v| v.parse::<i64>().ok())
                .ok_or_else(|| TransportError::Other(format!("missing {key}")))
        };

        let body = self.page(parse("offset")?, parse("limit")?).to_string();
        Ok(RawResponse::new(200, body))
    }
}

/// Answers every request with the same status
struct FixedStatus(u16);

impl Transport for FixedStatus {
    async fn get(&self, _url: &Url) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(self.0, "not json"))
    }
}

/// Remembers the last requested URL and returns an empty page
#[derive(Default)]
struct Recorder {
    last: Mutex<Option<Url>>,
}

impl Transport for Recorder {
    async fn get(&self, url: &Url) -> Result<RawResponse, TransportError> {
        *self.last.lock().unwrap() = Some(url.clone());
        Ok(RawResponse::new(
            200,
            r#"{"count": 0, "next": null, "previous": null, "results": []}"#,
        ))
    }
}

fn arb_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{3,10}", 1..80)
}

fn client<T: Transport>(transport: T) -> PokeApi<T> {
    PokeApi::with_transport(&ClientConfig::default(), transport).unwrap()
}

mod window_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Overlapping windows agree on the entries they share
        #[test]
        fn overlapping_windows_agree(
            names in arb_names(),
            offset in 0i64..60,
            limit in 1i64..30,
            shift in 0i64..30,
        ) {
            prop_assume!(shift < limit);
            let api = client(BerryCatalog { names });

            let wide = api.get_berry_list(offset, limit).unwrap();
            let narrow = api.get_berry_list(offset + shift, limit - shift).unwrap();

            let overlap = &wide.results[(shift as usize).min(wide.results.len())..];
            prop_assert_eq!(overlap, &narrow.results[..]);
        }

        #[test]
        fn page_never_exceeds_limit(names in arb_names(), offset in 0i64..100, limit in 0i64..50) {
            let total = names.len() as u64;
            let api = client(BerryCatalog { names });

            let page = api.get_berry_list(offset, limit).unwrap();
            prop_assert!(page.results.len() as i64 <= limit);
            prop_assert_eq!(page.count, total);
        }

        /// Walking `next` windows visits every entry once, in order
        #[test]
        fn consecutive_pages_cover_catalog(names in arb_names(), limit in 1i64..20) {
            let api = client(BerryCatalog { names: names.clone() });

            let mut seen = Vec::new();
            let mut offset = 0;
            loop {
                let page = api.get_berry_list(offset, limit).unwrap();
                seen.extend(page.results.iter().map(|r| r.name.clone()));
                if !page.has_next() {
                    break;
                }
                offset += limit;
            }

            prop_assert_eq!(seen, names);
        }
    }
}

mod status_tests {
    use super::*;

    proptest! {
        /// Every status lands in exactly one error class
        #[test]
        fn status_classification(status in 100u16..600) {
            let api = client(FixedStatus(status));
            let err = api.get::<Berry>(1).unwrap_err();

            let classified = match status {
                200..=299 => matches!(err, ApiError::Decode(_)),
                404 => err == ApiError::NotFound,
                400..=499 => matches!(err, ApiError::ClientError { status: s, .. } if s == status),
                500..=599 => matches!(err, ApiError::ServerError { status: s, .. } if s == status),
                _ => err == ApiError::UnexpectedStatus { status },
            };
            prop_assert!(classified, "status {} classified as {:?}", status, err);
        }
    }
}

mod pass_through_tests {
    use super::*;

    proptest! {
        /// Offset and limit reach the wire exactly as given
        #[test]
        fn offset_and_limit_unchanged(offset in any::<i64>(), limit in any::<i64>()) {
            let api = client(Recorder::default());
            api.get_resource_list("pokemon", offset, limit).unwrap();

            let url = api.as_async().transport().last.lock().unwrap().clone().unwrap();
            let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

            prop_assert_eq!(url.path(), "/api/v2/pokemon/");
            prop_assert_eq!(
                pairs,
                vec![
                    ("offset".to_string(), offset.to_string()),
                    ("limit".to_string(), limit.to_string()),
                ]
            );
        }

        /// Any id, including negative ones, becomes one path segment
        #[test]
        fn id_becomes_path_segment(id in any::<i64>()) {
            let api = client(Recorder::default());
            let _ = api.get::<Berry>(id);

            let url = api.as_async().transport().last.lock().unwrap().clone().unwrap();
            let expected = format!("/api/v2/berry/{id}/");
            prop_assert_eq!(url.path(), expected.as_str());
        }
    }
}
