use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ DNSSEC ============

/// Current DNSSEC setting of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dnssec {
    /// Whether DNSSEC is active for the domain.
    pub enabled: bool,
}

// ============ Delegation ============

/// Ordered list of nameserver hostnames delegated for a domain.
///
/// Serializes as a bare JSON array, which is both the request body of the
/// change endpoints and the `data` payload of their responses. Order is kept
/// exactly as sent or returned; no uniqueness or arity limit is enforced
/// locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delegation(pub Vec<String>);

impl Delegation {
    pub fn new<I, S>(name_servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(name_servers.into_iter().map(Into::into).collect())
    }

    pub fn name_servers(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Delegation {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Delegation {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A nameserver branded under the customer's own domain.
///
/// Returned by [`RegistrarService::change_domain_delegation_to_vanity`](crate::RegistrarService::change_domain_delegation_to_vanity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityNameServer {
    pub id: u64,
    /// Hostname of the nameserver, e.g. `ns1.example.com`.
    pub name: String,
    #[serde(default)]
    pub ipv4: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============ Domain ============

/// A domain in an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub account_id: u64,
    #[serde(default)]
    pub registrant_id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub unicode_name: Option<String>,
    /// `hosted`, `registered`, `expired`, ...
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============ Template ============

/// A record template that can be applied to a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub account_id: u64,
    pub name: String,
    /// Short identifier usable in place of the numeric id.
    pub sid: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
