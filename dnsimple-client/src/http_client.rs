//! Generic HTTP client tools
//!
//! Shared request execution, status mapping and JSON parsing used by
//! [`ReqwestTransport`](crate::ReqwestTransport) and [`Client`](crate::Client).
//!
//! # design principles
//! - **One HTTP call per operation** - no retry, no backoff; the caller decides
//! - **Status mapping before decoding** - a non-2xx response never reaches the envelope codec
//! - **Truncated logs** - response bodies are shortened before logging

use reqwest::RequestBuilder;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::transport::RawResponse;
use crate::utils::log_sanitizer::truncate_for_log;

/// DNSimple error body: `{"message": "...", "errors": {...}}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    errors: Option<serde_json::Value>,
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the raw response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `method_name` - request method name (for logging)
    /// * `url` - full URL (for logging)
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - status, headers and body text, whatever the status
    /// * `Err(ClientError::Timeout | ClientError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<RawResponse> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        // Headers must be taken before the body consumes the response
        let headers = response.headers().clone();

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Map a non-2xx response to a structured error
    ///
    /// # Arguments
    /// * `raw` - response returned by the transport
    /// * `path` - request path (used by `NotFound`)
    pub fn check_status(raw: &RawResponse, path: &str) -> Result<()> {
        if (200..300).contains(&raw.status) {
            return Ok(());
        }

        // Non-JSON bodies (proxy error pages) are kept verbatim as the message
        let (raw_message, errors) = match serde_json::from_str::<ApiErrorBody>(&raw.body) {
            Ok(parsed) => (parsed.message, parsed.errors),
            Err(_) => {
                let trimmed = raw.body.trim();
                ((!trimmed.is_empty()).then(|| truncate_for_log(trimmed)), None)
            }
        };

        let error = match raw.status {
            401 => ClientError::InvalidCredentials { raw_message },
            403 => ClientError::PermissionDenied { raw_message },
            404 => ClientError::NotFound {
                path: path.to_string(),
                raw_message,
            },
            400 | 422 => ClientError::InvalidRequest {
                status: raw.status,
                raw_message,
                errors,
            },
            429 => ClientError::RateLimited {
                retry_after: retry_after(&raw.headers),
                raw_message,
            },
            500..=599 => ClientError::ServerError {
                status: raw.status,
                raw_message,
            },
            status => ClientError::Unknown {
                status,
                raw_message,
            },
        };

        if error.is_expected() {
            log::warn!("API error on {path}: {error}");
        } else {
            log::error!("API error on {path}: {error}");
        }

        Err(error)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body
    pub fn to_json<B: serde::Serialize + ?Sized>(body: &B) -> Result<String> {
        serde_json::to_string(body).map_err(|e| ClientError::SerializationError {
            detail: e.to_string(),
        })
    }
}

/// `Retry-After` in seconds, if the header carries an integer
fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}
