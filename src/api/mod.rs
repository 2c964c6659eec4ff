//! PokeAPI access layer
//!
//! - [`http`] - The [`Transport`] seam and its reqwest implementation
//! - [`error`] - Error types, status classification and decoding
//! - [`client`] - The async client and its configuration
//! - [`blocking`] - The blocking client, driving the async one
//! - [`pending`] - Handles to spawned calls

pub mod blocking;
pub mod client;
pub mod error;
pub mod http;
pub mod pending;

pub use client::{ClientConfig, ConfigError, PokeApi, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{check_status, decode, ApiError, TransportError};
pub use http::{RawResponse, ReqwestTransport, Transport};
pub use pending::PendingCall;
