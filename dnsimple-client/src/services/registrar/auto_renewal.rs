//! Domain auto-renewal

use crate::error::Result;
use crate::paths::{auto_renewal_path, versioned};
use crate::response::Response;
use crate::types::Domain;

use super::RegistrarService;

impl RegistrarService<'_> {
    /// Enable auto-renewal for the domain.
    ///
    /// The API answers with an empty body, so `data` is normally `None`.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/auto-renewal/#enable>
    pub async fn enable_domain_auto_renewal(
        &self,
        account_id: &str,
        domain: &str,
    ) -> Result<Response<Option<Domain>>> {
        let path = versioned(&auto_renewal_path(account_id, domain));
        self.client.put(&path).await
    }

    /// Disable auto-renewal for the domain.
    ///
    /// See <https://developer.dnsimple.com/v2/registrar/auto-renewal/#disable>
    pub async fn disable_domain_auto_renewal(
        &self,
        account_id: &str,
        domain: &str,
    ) -> Result<Response<Option<Domain>>> {
        let path = versioned(&auto_renewal_path(account_id, domain));
        self.client.delete(&path).await
    }
}
