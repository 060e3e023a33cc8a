//! 版本化 API 路径构建
//!
//! 所有函数都是纯函数：标识符原样拼接，不做校验或转义。
//! 非法标识符只会在随后的请求中以服务端错误的形式出现。

use std::fmt::Display;

/// API version prefix shared by every endpoint.
pub const API_VERSION: &str = "v2";

/// Prefix `path` with the API version, e.g. `/1010/domains` -> `/v2/1010/domains`.
pub fn versioned(path: &str) -> String {
    format!("/{API_VERSION}{path}")
}

/// `/{account}/domains/{domain}`
pub fn domain_path(account_id: impl Display, domain: impl Display) -> String {
    format!("/{account_id}/domains/{domain}")
}

/// `/{account}/domains/{domain}/dnssec`
pub fn dnssec_path(account_id: impl Display, domain: impl Display) -> String {
    format!("{}/dnssec", domain_path(account_id, domain))
}

/// `/{account}/registrar/domains/{domain}`
pub fn registrar_domain_path(account_id: impl Display, domain: impl Display) -> String {
    format!("/{account_id}/registrar/domains/{domain}")
}

/// `/{account}/registrar/domains/{domain}/auto_renewal`
pub fn auto_renewal_path(account_id: impl Display, domain: impl Display) -> String {
    format!("{}/auto_renewal", registrar_domain_path(account_id, domain))
}

/// `/{account}/registrar/domains/{domain}/delegation`
pub fn delegation_path(account_id: impl Display, domain: impl Display) -> String {
    format!("{}/delegation", registrar_domain_path(account_id, domain))
}

/// `/{account}/registrar/domains/{domain}/delegation/vanity`
pub fn vanity_delegation_path(account_id: impl Display, domain: impl Display) -> String {
    format!("{}/vanity", delegation_path(account_id, domain))
}

/// `/{account}/domains/{domain}/templates/{template}`
pub fn template_application_path(
    account_id: impl Display,
    domain: impl Display,
    template: impl Display,
) -> String {
    format!("{}/templates/{template}", domain_path(account_id, domain))
}
