//! API client and its configuration

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::response::{HttpResponse, Response};
use crate::services::{DomainsService, RegistrarService, TemplatesService};
use crate::transport::{ReqwestTransport, Transport, TransportConfig, TransportRequest};
use crate::utils::log_sanitizer::mask_secret;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.dnsimple.com";
/// Sandbox API endpoint.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_TOKEN: &str = "DNSIMPLE_TOKEN";
const ENV_BASE_URL: &str = "DNSIMPLE_BASE_URL";
const ENV_USER_AGENT: &str = "DNSIMPLE_USER_AGENT";

/// Default `User-Agent`, extended by [`ClientBuilder::user_agent`].
pub fn default_user_agent() -> String {
    format!("dnsimple-client-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for the v2 API.
///
/// Cheap to clone; clones share the underlying transport and connection pool.
/// Calls are independent and may run concurrently.
///
/// # Construction
///
/// ```rust,no_run
/// use dnsimple_client::Client;
///
/// # fn main() -> dnsimple_client::Result<()> {
/// let client = Client::builder("your-access-token").sandbox().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production API with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token.into())
    }

    /// Creates a client on top of a custom [`Transport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// DNSSEC operations on hosted domains.
    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    /// Registrar operations: auto-renewal and delegation.
    pub fn registrar(&self) -> RegistrarService<'_> {
        RegistrarService::new(self)
    }

    /// Template operations.
    pub fn templates(&self) -> TemplatesService<'_> {
        TemplatesService::new(self)
    }

    // ==================== 请求方法 ====================

    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::GET, path, None).await
    }

    /// 执行无 body 的 POST 请求
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::POST, path, None).await
    }

    /// 执行无 body 的 PUT 请求
    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::PUT, path, None).await
    }

    /// 执行带 JSON body 的 PUT 请求
    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<Response<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let payload = HttpUtils::to_json(body)?;
        self.request(Method::PUT, path, Some(payload)).await
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Response<T>> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send, map status, decode the envelope
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<Response<T>> {
        let raw = self
            .transport
            .send(TransportRequest {
                method,
                path: path.to_string(),
                body,
            })
            .await?;

        HttpUtils::check_status(&raw, path)?;

        let http_response = HttpResponse {
            status: raw.status,
            headers: raw.headers,
        };
        Response::decode(&raw.body, http_response)
    }
}

/// Builder for [`Client`].
#[derive(Clone)]
pub struct ClientBuilder {
    token: String,
    base_url: String,
    user_agent: Option<String>,
    connect_timeout: Duration,
    timeout: Duration,
    use_system_proxy: bool,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("token", &mask_secret(&self.token))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .field("use_system_proxy", &self.use_system_proxy)
            .finish()
    }
}

impl ClientBuilder {
    fn new(token: String) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            use_system_proxy: true,
        }
    }

    /// Reads `DNSIMPLE_TOKEN` (required), `DNSIMPLE_BASE_URL` and
    /// `DNSIMPLE_USER_AGENT` from the environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ENV_TOKEN)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration {
                detail: format!("{ENV_TOKEN} is not set"),
            })?;

        let mut builder = Self::new(token);
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|v| !v.trim().is_empty()) {
            builder = builder.user_agent(user_agent);
        }
        Ok(builder)
    }

    /// Override the API endpoint (default: [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Target the sandbox environment ([`SANDBOX_BASE_URL`]).
    #[must_use]
    pub fn sandbox(self) -> Self {
        self.base_url(SANDBOX_BASE_URL)
    }

    /// Prepend a custom identifier to the default `User-Agent`.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the connection timeout (default: 10s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout (default: 30s).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ignore proxy settings from the environment.
    #[must_use]
    pub fn no_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Final `User-Agent` header value.
    pub fn resolved_user_agent(&self) -> String {
        match &self.user_agent {
            Some(custom) => format!("{custom} {}", default_user_agent()),
            None => default_user_agent(),
        }
    }

    /// Build the [`Client`] instance.
    pub fn build(self) -> Result<Client> {
        let config = TransportConfig {
            user_agent: self.resolved_user_agent(),
            base_url: self.base_url,
            connect_timeout: self.connect_timeout,
            timeout: self.timeout,
            use_system_proxy: self.use_system_proxy,
        };
        let transport = ReqwestTransport::new(&config, self.token)?;
        log::debug!("Client configured for {}", transport.base_url());
        Ok(Client::with_transport(Arc::new(transport)))
    }
}
