//! # dnsimple-client
//!
//! Async client for the DNSimple v2 domain-registration and DNS-management API.
//!
//! Every operation is a single HTTP request against a versioned path
//! (`/v2/{account}/...`). The JSON `{"data": ...}` envelope is decoded into a
//! typed [`Response<T>`], which also carries the HTTP status and headers of
//! the call.
//!
//! ## Supported Operations
//!
//! | Service | Operation | Method |
//! |---------|-----------|--------|
//! | [`DomainsService`] | Enable / disable / get DNSSEC | `POST` / `DELETE` / `GET` |
//! | [`RegistrarService`] | Enable / disable auto-renewal | `PUT` / `DELETE` |
//! | [`RegistrarService`] | Get / change delegation | `GET` / `PUT` |
//! | [`RegistrarService`] | Change to / from vanity delegation | `PUT` / `DELETE` |
//! | [`TemplatesService`] | Apply template | `POST` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsimple_client::{Client, Delegation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder("your-access-token").sandbox().build()?;
//!
//!     // DNSSEC
//!     let dnssec = client.domains().get_dnssec("1010", "example.com").await?;
//!     println!("dnssec enabled: {}", dnssec.data.enabled);
//!
//!     // Delegation
//!     let delegation = Delegation::new(["ns1.dnsimple.com", "ns2.dnsimple.com"]);
//!     let updated = client
//!         .registrar()
//!         .change_domain_delegation("1010", "example.com", &delegation)
//!         .await?;
//!     for ns in &updated.data {
//!         println!("{ns}");
//!     }
//!
//!     // Rate-limit headers of the last call
//!     println!("remaining: {:?}", updated.http_response.rate_limit_remaining());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`ClientBuilder`] sets the base URL, user agent and timeouts.
//! [`ClientBuilder::from_env`] reads `DNSIMPLE_TOKEN`, `DNSIMPLE_BASE_URL`
//! and `DNSIMPLE_USER_AGENT`. A custom [`Transport`] can be plugged in with
//! [`Client::with_transport`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: the exchange did not complete
//! - [`ClientError::InvalidCredentials`], [`ClientError::NotFound`], ...: non-2xx status
//! - [`ClientError::ParseError`]: the body was not the expected JSON
//!
//! Nothing is retried by the library.
//!
//! ## Logging
//!
//! Requests, statuses and (truncated) bodies are logged through the
//! [`log`](https://docs.rs/log) facade at `debug` level. The access token is
//! never logged.

mod client;
mod error;
mod http_client;
mod response;
mod services;
mod transport;
mod types;
mod utils;

/// Versioned path builders.
pub mod paths;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export client and configuration
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, SANDBOX_BASE_URL, default_user_agent};

// Re-export envelope types
pub use response::{HttpResponse, Pagination, Response};

// Re-export services
pub use services::{DomainsService, RegistrarService, TemplatesService};

// Re-export transport seam
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportConfig, TransportRequest};

// Re-export types
pub use types::{Delegation, Dnssec, Domain, Template, VanityNameServer};
