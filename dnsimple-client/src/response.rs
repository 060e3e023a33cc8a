//! Response envelope and transport response metadata

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http_client::HttpUtils;

const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Body used in place of an empty (HTTP 204) response.
const EMPTY_ENVELOPE: &str = r#"{"data":null}"#;

/// Status line and headers of the HTTP response behind an API result.
///
/// Attached to every [`Response`] so callers can inspect the status code,
/// rate-limit counters or any other header even on successful calls.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
}

impl HttpResponse {
    /// Maximum number of requests per hour (`X-RateLimit-Limit`).
    pub fn rate_limit(&self) -> Option<u64> {
        self.header_u64(RATE_LIMIT_HEADER)
    }

    /// Requests left in the current window (`X-RateLimit-Remaining`).
    pub fn rate_limit_remaining(&self) -> Option<u64> {
        self.header_u64(RATE_LIMIT_REMAINING_HEADER)
    }

    /// When the current rate-limit window resets (`X-RateLimit-Reset`, Unix seconds).
    pub fn rate_limit_reset(&self) -> Option<DateTime<Utc>> {
        self.header_u64(RATE_LIMIT_RESET_HEADER)
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Raw header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    fn header_u64(&self, name: &str) -> Option<u64> {
        self.header(name).and_then(|v| v.trim().parse().ok())
    }
}

/// Pagination metadata sent alongside list payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub per_page: u32,
    pub total_entries: u32,
    pub total_pages: u32,
}

/// Typed API result.
///
/// # Type Parameters
///
/// * `T`: The payload carried in the `data` key (e.g. [`Dnssec`](crate::Dnssec),
///   [`Delegation`](crate::Delegation)). Endpoints that may answer with an
///   empty body use `Option<_>` or `()`.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// Decoded `data` payload.
    pub data: T,
    /// Pagination metadata, when the endpoint sends it.
    pub pagination: Option<Pagination>,
    /// The transport response this result was decoded from.
    pub http_response: HttpResponse,
}

impl<T> Response<T> {
    /// Transform the payload, keeping metadata and transport response.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            data: f(self.data),
            pagination: self.pagination,
            http_response: self.http_response,
        }
    }

    /// Shortcut for `self.http_response.status`.
    pub fn status(&self) -> u16 {
        self.http_response.status
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Wire shape of the JSON envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
    #[serde(default)]
    pagination: Option<Pagination>,
}

impl<T: DeserializeOwned> Response<T> {
    /// Decode an envelope body and attach the transport response.
    ///
    /// An empty body decodes as `{"data": null}`, so `Option<_>` and `()`
    /// payloads accept HTTP 204 answers while required payloads fail with
    /// [`ClientError::ParseError`](crate::ClientError::ParseError).
    pub(crate) fn decode(body: &str, http_response: HttpResponse) -> Result<Self> {
        let text = if body.trim().is_empty() {
            EMPTY_ENVELOPE
        } else {
            body
        };

        let envelope: Envelope<T> = HttpUtils::parse_json(text)?;

        Ok(Self {
            data: envelope.data,
            pagination: envelope.pagination,
            http_response,
        })
    }
}
