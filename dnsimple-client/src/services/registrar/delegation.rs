//! Nameserver delegation, including vanity delegation

use crate::error::Result;
use crate::paths::{delegation_path, vanity_delegation_path, versioned};
use crate::response::Response;
use crate::types::{Delegation, VanityNameServer};

use super::RegistrarService;

impl RegistrarService<'_> {
    /// List the nameservers the domain is delegated to.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/delegation/#getDomainDelegation>
    pub async fn get_domain_delegation(
        &self,
        account_id: &str,
        domain: &str,
    ) -> Result<Response<Delegation>> {
        let path = versioned(&delegation_path(account_id, domain));
        self.client.get(&path).await
    }

    /// Replace the nameservers the domain is delegated to.
    ///
    /// The nameservers are sent as a JSON array, in order.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/delegation/#changeDomainDelegation>
    pub async fn change_domain_delegation(
        &self,
        account_id: &str,
        domain: &str,
        delegation: &Delegation,
    ) -> Result<Response<Delegation>> {
        let path = versioned(&delegation_path(account_id, domain));
        self.client.put_json(&path, delegation).await
    }

    /// Delegate the domain to vanity nameservers.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/delegation/#changeDomainDelegationToVanity>
    pub async fn change_domain_delegation_to_vanity(
        &self,
        account_id: &str,
        domain: &str,
        delegation: &Delegation,
    ) -> Result<Response<Vec<VanityNameServer>>> {
        let path = versioned(&vanity_delegation_path(account_id, domain));
        self.client.put_json(&path, delegation).await
    }

    /// Revert a vanity delegation back to the default nameservers.
    ///
    /// Any payload the API returns is discarded.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/delegation/#changeDomainDelegationFromVanity>
    pub async fn change_domain_delegation_from_vanity(
        &self,
        account_id: &str,
        domain: &str,
    ) -> Result<Response<()>> {
        let path = versioned(&vanity_delegation_path(account_id, domain));
        let response: Response<Option<serde_json::Value>> = self.client.delete(&path).await?;
        Ok(response.map(|_| ()))
    }
}
