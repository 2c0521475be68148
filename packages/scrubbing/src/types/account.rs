//! Account and contact graph supplied by entity resolution.
//!
//! These types are read-only inputs: the scrubbing pipeline never mutates or
//! persists them. Referential integrity (non-empty name, well-formed domains)
//! is the caller's contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client company as resolved by the entity-resolution subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,

    /// Verbatim company name, e.g. "Acme Corporation"
    pub name: String,

    /// Suffix-stripped, lowercased canonical form, e.g. "acme"
    pub normalized_name: String,

    /// Primary email/web domain, e.g. "acme.com"
    #[serde(default)]
    pub domain: Option<String>,

    /// Additional domains the company is known under, in precedence order
    #[serde(default)]
    pub domain_aliases: Vec<String>,

    /// People at the client who appear in call transcripts
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A person at the client company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    pub email: String,

    pub email_domain: String,
}

impl Contact {
    /// Contacts with both a name and a title can be scrubbed as a
    /// "Name, Title" attribution unit.
    pub fn has_attribution(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
            && self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
