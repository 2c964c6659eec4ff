//! Error taxonomy and response classification
//!
//! Every call ends in exactly one of: a decoded value, or one [`ApiError`]
//! variant. Classification only looks at the status code; error bodies are
//! carried along for debugging but never parsed.

use serde::de::DeserializeOwned;

use super::http::RawResponse;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Failure to obtain any HTTP response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    /// The pending call was aborted before the response arrived.
    #[error("request canceled")]
    Canceled,

    #[error("transport failure: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Errors returned by every accessor, in both the async and blocking forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No resource is registered under this name.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a 4xx status other than 404.
    #[error("client error: HTTP {status}")]
    ClientError { status: u16, body: String },

    /// The server returned a 5xx status.
    #[error("server error: HTTP {status}")]
    ServerError { status: u16, body: String },

    /// A non-success status outside the 4xx/5xx ranges (1xx, unfollowed 3xx).
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body of a successful response did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// HTTP status for errors that carry one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::ClientError { status, .. }
            | ApiError::ServerError { status, .. }
            | ApiError::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Map a raw response to its body on 2xx, or to the matching error variant.
///
/// Error bodies are kept as (lossily decoded) text for debugging only.
pub fn check_status(response: RawResponse) -> Result<Vec<u8>, ApiError> {
    let RawResponse { status, body } = response;

    match status {
        200..=299 => Ok(body),
        404 => {
            tracing::debug!("API returned 404");
            Err(ApiError::NotFound)
        }
        400..=499 => {
            tracing::warn!("API error: {} - {}", status, sanitize_for_log(&body));
            Err(ApiError::ClientError {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
        500..=u16::MAX => {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            Err(ApiError::ServerError {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
        _ => Err(ApiError::UnexpectedStatus { status }),
    }
}

/// Strictly decode a JSON body. Missing required fields and invalid UTF-8
/// are errors.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Truncate a response body and strip control characters before logging it
pub(crate) fn sanitize_for_log(body: &[u8]) -> String {
    let body = String::from_utf8_lossy(body);
    let truncated = match body.char_indices().nth(MAX_LOG_BODY_LENGTH) {
        Some((cut, _)) => format!("{}... [truncated, {} bytes total]", &body[..cut], body.len()),
        None => body.into_owned(),
    };

    truncated.replace(|c: char| c.is_control() && c != ' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, body)
    }

    #[test]
    fn success_statuses_return_body() {
        assert_eq!(check_status(response(200, "{}")).unwrap(), b"{}");
        assert!(check_status(response(204, "")).unwrap().is_empty());
    }

    #[test]
    fn not_found_is_distinct_from_other_client_errors() {
        assert_eq!(
            check_status(response(404, "Not Found")).unwrap_err(),
            ApiError::NotFound
        );
        let err = check_status(response(400, "bad")).unwrap_err();
        assert!(matches!(err, ApiError::ClientError { status: 400, .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn server_errors_keep_status_and_body() {
        let err = check_status(response(503, "maintenance")).unwrap_err();
        assert_eq!(
            err,
            ApiError::ServerError {
                status: 503,
                body: "maintenance".to_string()
            }
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn redirect_status_is_unexpected() {
        let err = check_status(response(304, "")).unwrap_err();
        assert_eq!(err, ApiError::UnexpectedStatus { status: 304 });
    }

    #[test]
    fn decode_rejects_partial_records() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Sample {
            id: i64,
            name: String,
        }

        let err = decode::<Sample>(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(ref msg) if msg.contains("name")));
        assert!(decode::<Sample>(b"not json").is_err());
    }

    #[test]
    fn decode_rejects_invalid_utf8_in_strings() {
        #[derive(Debug, serde::Deserialize)]
        struct Sample {
            name: String,
        }

        let err = decode::<Sample>(b"{\"name\": \"sit\xFFus\"}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
        assert_eq!(decode::<Sample>(br#"{"name": "sitrus"}"#).unwrap().name, "sitrus");
    }

    #[test]
    fn error_bodies_keep_invalid_bytes_visible() {
        let err = check_status(RawResponse::new(500, b"oops\xFF".to_vec())).unwrap_err();
        assert_eq!(
            err,
            ApiError::ServerError {
                status: 500,
                body: "oops\u{FFFD}".to_string()
            }
        );
    }

    #[test]
    fn sanitize_truncates_on_char_boundary() {
        let body = "é".repeat(300);
        let sanitized = sanitize_for_log(body.as_bytes());
        assert!(sanitized.contains("truncated"));
        assert!(sanitized.starts_with("éé"));
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log(b"line\none\t"), "lineone");
    }
}
