//! Fixture builders for tests.
//!
//! Kept in the library (not `#[cfg(test)]`) so integration tests and
//! downstream crates can build realistic Accounts without hand-rolling the
//! whole graph.

use uuid::Uuid;

use crate::types::{Account, Contact, PageContent};

/// An Account with a name, normalized name, and primary domain. Pass an
/// empty domain to get a domain-less account.
pub fn account_with_domain(name: &str, normalized_name: &str, domain: &str) -> Account {
    Account {
        id: Uuid::new_v4(),
        name: name.to_string(),
        normalized_name: normalized_name.to_string(),
        domain: if domain.is_empty() {
            None
        } else {
            Some(domain.to_string())
        },
        domain_aliases: vec![],
        contacts: vec![],
    }
}

/// A contact whose email is derived from the name.
pub fn contact(name: Option<&str>, title: Option<&str>) -> Contact {
    let local = name
        .unwrap_or("contact")
        .to_lowercase()
        .replace(char::is_whitespace, ".");
    Contact {
        name: name.map(str::to_string),
        title: title.map(str::to_string),
        email: format!("{local}@client.invalid"),
        email_domain: "client.invalid".to_string(),
    }
}

/// A page with a title and body and nothing else.
pub fn page(title: &str, body: &str) -> PageContent {
    PageContent {
        title: title.to_string(),
        subtitle: None,
        body: body.to_string(),
        callout_boxes: vec![],
    }
}
