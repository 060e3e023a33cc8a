//! HTTP transport seam
//!
//! [`Client`](crate::Client) only depends on the [`Transport`] trait. The
//! default implementation, [`ReqwestTransport`], adds the base URL, bearer
//! token and user agent to every request. Custom transports (proxies,
//! recording, tests) can be injected with
//! [`Client::with_transport`](crate::Client::with_transport).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Method, Url};

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::mask_secret;

/// An outbound API request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    /// Versioned path, e.g. `/v2/1010/domains/example.com/dnssec`.
    pub path: String,
    /// JSON-encoded body, `None` for parameterless calls.
    pub body: Option<String>,
}

/// What came back over the wire, before status mapping and decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

/// Executes one HTTP exchange.
///
/// Implementations return `Ok` for every response that was received, whatever
/// its status; only failures to complete the exchange (connection, timeout,
/// body read) are errors. Status mapping happens in the client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse>;
}

/// Connection settings of a [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Absolute `http`/`https` URL; a trailing `/` is dropped.
    pub base_url: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

/// [`Transport`] backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ReqwestTransport {
    /// Build a transport authenticated with `token`.
    pub fn new(config: &TransportConfig, token: String) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| ClientError::Configuration {
            detail: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url)
            .field("token", &mask_secret(&self.token))
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json");

        if let Some(body) = request.body {
            log::debug!("Request Body: {body}");
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        HttpUtils::execute_request(builder, request.method.as_str(), &url).await
    }
}

/// Validate scheme/host and strip the trailing slash
fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url).map_err(|e| ClientError::Configuration {
        detail: format!("invalid base URL '{base_url}': {e}"),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClientError::Configuration {
            detail: format!("base URL must be an absolute http(s) URL, got '{base_url}'"),
        });
    }

    Ok(base_url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_dropped() {
        assert_eq!(
            normalize_base_url("https://api.sandbox.dnsimple.com/").unwrap(),
            "https://api.sandbox.dnsimple.com"
        );
    }

    #[test]
    fn base_url_with_port() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn base_url_rejects_relative() {
        assert!(matches!(
            normalize_base_url("api.dnsimple.com"),
            Err(ClientError::Configuration { .. })
        ));
    }

    #[test]
    fn base_url_rejects_other_schemes() {
        assert!(matches!(
            normalize_base_url("ftp://api.dnsimple.com"),
            Err(ClientError::Configuration { .. })
        ));
    }

    #[test]
    fn debug_masks_token() {
        let config = TransportConfig {
            base_url: "https://api.dnsimple.com/".to_string(),
            user_agent: "test-agent".to_string(),
            connect_timeout: Duration::from_secs(1),
            timeout: Duration::from_secs(1),
            use_system_proxy: false,
        };
        let transport = ReqwestTransport::new(&config, "secret-token-1234".to_string()).unwrap();
        assert_eq!(transport.base_url(), "https://api.dnsimple.com");
        let debug = format!("{transport:?}");
        assert!(debug.contains("****1234"));
        assert!(!debug.contains("secret-token"));
    }
}
