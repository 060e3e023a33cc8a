//! Registrar operations

mod auto_renewal;
mod delegation;

use crate::client::Client;

/// Registrar operations on registered domains: auto-renewal and
/// nameserver delegation.
///
/// Obtained with [`Client::registrar`].
#[derive(Debug, Clone, Copy)]
pub struct RegistrarService<'a> {
    client: &'a Client,
}

impl<'a> RegistrarService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }
}
