use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all API operations.
///
/// Transport failures, non-success HTTP statuses and JSON (de)serialization
/// problems all surface through this enum. All variants are serializable for
/// structured error reporting.
///
/// The library never retries. [`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited) and
/// [`ServerError`](Self::ServerError) are the variants a caller may choose to
/// retry.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The access token is missing, invalid or expired (HTTP 401).
    #[error("Invalid credentials{}", detail_suffix(.raw_message.as_deref()))]
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The token lacks permission for the requested operation (HTTP 403).
    #[error("Permission denied{}", detail_suffix(.raw_message.as_deref()))]
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The addressed resource does not exist (HTTP 404).
    #[error("Resource '{path}' not found{}", detail_suffix(.raw_message.as_deref()))]
    NotFound {
        /// Request path that produced the 404.
        path: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rejected the request as malformed or invalid (HTTP 400/422).
    #[error("Invalid request (HTTP {status}){}", detail_suffix(.raw_message.as_deref()))]
    InvalidRequest {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
        /// Field-level validation errors, as returned by the API.
        errors: Option<serde_json::Value>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    #[error("Rate limited{}", retry_suffix(.retry_after.as_ref().copied()))]
    RateLimited {
        /// Suggested wait time in seconds, taken from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API failed on its side (HTTP 5xx).
    #[error("Server error (HTTP {status}){}", detail_suffix(.raw_message.as_deref()))]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("Serialization error: {detail}")]
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client could not be configured (bad base URL, missing token, etc.).
    #[error("Configuration error: {detail}")]
    Configuration {
        /// Details about the configuration problem.
        detail: String,
    },

    /// A non-success status not covered by any other variant.
    #[error("Unexpected HTTP {status}{}", detail_suffix(.raw_message.as_deref()))]
    Unknown {
        /// HTTP status code.
        status: u16,
        /// Raw error message or body from the API.
        raw_message: Option<String>,
    },
}

impl ClientError {
    /// 调用方可预期的错误（凭证、权限、资源不存在、参数校验、限流），用于日志分级。
    ///
    /// `true` 记 `warn`，`false` 记 `error`。新增变体时同步更新。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::InvalidRequest { .. }
                | Self::RateLimited { .. }
        )
    }

    /// HTTP status that produced this error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials { .. } => Some(401),
            Self::PermissionDenied { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::InvalidRequest { status, .. }
            | Self::ServerError { status, .. }
            | Self::Unknown { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(raw_message: Option<&str>) -> String {
    raw_message
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}

fn retry_suffix(retry_after: Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
