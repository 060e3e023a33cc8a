//! Domain DNSSEC settings

use crate::client::Client;
use crate::error::Result;
use crate::paths::{dnssec_path, versioned};
use crate::response::Response;
use crate::types::Dnssec;

/// Operations on hosted domains.
///
/// Obtained with [`Client::domains`].
#[derive(Debug, Clone, Copy)]
pub struct DomainsService<'a> {
    client: &'a Client,
}

impl<'a> DomainsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Enable DNSSEC on the domain.
    ///
    /// Enabling an already signed domain is not an error; the returned
    /// setting reports `enabled: true` either way.
    ///
    /// See <https://developer.dnsimple.com/v2/domains/dnssec/#enable>
    pub async fn enable_dnssec(&self, account_id: &str, domain: &str) -> Result<Response<Dnssec>> {
        let path = versioned(&dnssec_path(account_id, domain));
        self.client.post(&path).await
    }

    /// Disable DNSSEC on the domain.
    ///
    /// The API answers with an empty body, so `data` is normally `None`.
    ///
    /// See <https://developer.dnsimple.com/v2/domains/dnssec/#disable>
    pub async fn disable_dnssec(
        &self,
        account_id: &str,
        domain: &str,
    ) -> Result<Response<Option<Dnssec>>> {
        let path = versioned(&dnssec_path(account_id, domain));
        self.client.delete(&path).await
    }

    /// Retrieve the current DNSSEC status of the domain.
    ///
    /// See <https://developer.dnsimple.com/v2/domains/dnssec/#get>
    pub async fn get_dnssec(&self, account_id: &str, domain: &str) -> Result<Response<Dnssec>> {
        let path = versioned(&dnssec_path(account_id, domain));
        self.client.get(&path).await
    }
}
