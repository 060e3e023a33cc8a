//! Template application

use crate::client::Client;
use crate::error::Result;
use crate::paths::{template_application_path, versioned};
use crate::response::Response;
use crate::types::Template;

/// Operations on record templates.
///
/// Obtained with [`Client::templates`].
#[derive(Debug, Clone, Copy)]
pub struct TemplatesService<'a> {
    client: &'a Client,
}

impl<'a> TemplatesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Apply a template to the given domain.
    ///
    /// `template` may be the numeric id or the short identifier (sid).
    /// The API answers with an empty body, so `data` is normally `None`.
    ///
    /// See <https://developer.dnsimple.com/v2/templates/domains/#apply>
    pub async fn apply_template(
        &self,
        account_id: &str,
        template: &str,
        domain: &str,
    ) -> Result<Response<Option<Template>>> {
        let path = versioned(&template_application_path(account_id, domain, template));
        self.client.post(&path).await
    }
}
