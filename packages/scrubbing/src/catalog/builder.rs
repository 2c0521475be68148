//! Term catalog construction.
//!
//! Pure function from an Account (plus optional custom org mappings) to the
//! ordered set of patterns considered equivalent to the client's identity.
//! The catalog is rebuilt on every call — domain aliases can change between
//! publish attempts and re-validation must see the current Account state.

use indexmap::IndexSet;
use regex::Regex;

use crate::types::Account;

/// Replacement for scrubbed company-name terms.
pub const COMPANY_PLACEHOLDER: &str = "the client";

/// Fixed replacement for scrubbed domains. Always a neutral, resolvable-free
/// domain so emails like `sales@acme.com` stay readable after scrubbing.
pub const DOMAIN_PLACEHOLDER: &str = "example.com";

/// Minimum length for auto-generated name terms.
const MIN_AUTO_TERM_LEN: usize = 4;
/// Minimum length for initials-based acronyms.
const MIN_ACRONYM_LEN: usize = 3;
/// Minimum length for admin-supplied custom mappings (an admin opted in
/// explicitly, so no further filtering).
const MIN_CUSTOM_TERM_LEN: usize = 2;

/// What a matched term is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermReplacement {
    /// Fixed domain placeholder
    Domain,
    /// Fixed company placeholder
    Company,
    /// Admin-supplied replacement text
    Custom(String),
}

/// One scrub pattern. Ephemeral — never persisted or cached.
#[derive(Debug, Clone)]
pub struct ScrubTerm {
    /// Human-readable label reported in `terms_replaced`
    pub label: String,
    pub pattern: Regex,
    pub replacement: TermReplacement,
}

impl ScrubTerm {
    pub fn replacement_text(&self) -> &str {
        match &self.replacement {
            TermReplacement::Domain => DOMAIN_PLACEHOLDER,
            TermReplacement::Company => COMPANY_PLACEHOLDER,
            TermReplacement::Custom(text) => text,
        }
    }
}

/// The full catalog, split by category because domains are substituted in an
/// earlier pipeline pass than company names (the name is often a substring of
/// the domain).
#[derive(Debug, Clone, Default)]
pub struct TermCatalog {
    /// Substring-matched, always case-insensitive, longest-label-first
    pub domain_terms: Vec<ScrubTerm>,
    /// Word-boundary-matched; custom mappings first, then auto-generated
    /// variants, longest-label-first within each tier
    pub name_terms: Vec<ScrubTerm>,
}

/// Build the ordered term catalog for an Account.
///
/// `custom_mappings` are admin-supplied `(pattern, replacement)` pairs with
/// highest precedence. No error conditions: an Account with an empty name
/// yields only domain/custom terms.
pub fn build_term_catalog(account: &Account, custom_mappings: &[(String, String)]) -> TermCatalog {
    let mut name_terms = Vec::new();

    // Custom tier first: highest precedence, minimum length 2, longest-first.
    let mut custom: Vec<&(String, String)> = custom_mappings
        .iter()
        .filter(|(pattern, _)| pattern.trim().len() >= MIN_CUSTOM_TERM_LEN)
        .collect();
    custom.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    for (pattern, replacement) in custom {
        name_terms.push(ScrubTerm {
            label: pattern.clone(),
            pattern: bounded_term_pattern(pattern),
            replacement: TermReplacement::Custom(replacement.clone()),
        });
    }

    // Auto-generated tier: longest-label-first so a short variant's
    // replacement never clobbers a longer variant's match window.
    let mut variants: Vec<String> = name_variations(account).into_iter().collect();
    variants.sort_by(|a, b| b.len().cmp(&a.len()));
    for variant in variants {
        name_terms.push(ScrubTerm {
            label: variant.clone(),
            pattern: bounded_term_pattern(&variant),
            replacement: TermReplacement::Company,
        });
    }

    let mut domains: IndexSet<String> = IndexSet::new();
    if let Some(domain) = &account.domain {
        let domain = domain.trim().to_lowercase();
        if !domain.is_empty() {
            domains.insert(domain);
        }
    }
    for alias in &account.domain_aliases {
        let alias = alias.trim().to_lowercase();
        if !alias.is_empty() {
            domains.insert(alias);
        }
    }
    let mut domains: Vec<String> = domains
        .into_iter()
        // Replacing the placeholder with itself would spin the idempotence
        // counter forever.
        .filter(|d| d != DOMAIN_PLACEHOLDER)
        .collect();
    // Longest-first, same as the name tiers: a primary domain that is a
    // prefix of an alias must not substitute inside the alias's match window.
    domains.sort_by(|a, b| b.len().cmp(&a.len()));
    let domain_terms = domains
        .into_iter()
        .map(|domain| ScrubTerm {
            label: domain.clone(),
            pattern: substring_pattern(&domain),
            replacement: TermReplacement::Domain,
        })
        .collect();

    TermCatalog {
        domain_terms,
        name_terms,
    }
}

/// Generate the deduplicated name-variation set for an Account.
///
/// Variants: verbatim name, normalized name, title-cased normalized name,
/// first two words of a multi-word name, initials acronym (only for names of
/// three or more words, acronym length >= 3).
fn name_variations(account: &Account) -> IndexSet<String> {
    let mut variants = IndexSet::new();

    let name = account.name.trim();
    if !name.is_empty() {
        variants.insert(name.to_string());
        // "Acme Corp" must also catch "Acme Corporation" in prose, else the
        // shorter "Acme" variant leaves a dangling "Corporation" behind.
        if let Some(expanded) = expand_corporate_suffix(name) {
            variants.insert(expanded);
        }
    }

    let normalized = account.normalized_name.trim();
    if normalized.len() >= MIN_AUTO_TERM_LEN {
        variants.insert(normalized.to_string());
        variants.insert(title_case(normalized));
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() > 2 {
        let first_two = words[..2].join(" ");
        if first_two.len() >= MIN_AUTO_TERM_LEN {
            variants.insert(first_two);
        }

        let acronym: String = words
            .iter()
            .filter_map(|w| w.chars().next())
            .filter(|c| c.is_alphabetic())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if acronym.len() >= MIN_ACRONYM_LEN {
            variants.insert(acronym);
        }
    }

    variants.retain(|v| {
        (v.len() >= MIN_AUTO_TERM_LEN || (v.len() >= MIN_ACRONYM_LEN && is_acronym(v)))
            && v.to_lowercase() != COMPANY_PLACEHOLDER
    });
    variants
}

/// Expand an abbreviated trailing corporate suffix ("Corp" -> "Corporation")
/// so the long spelling is caught as a single term.
fn expand_corporate_suffix(name: &str) -> Option<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    let (last, head) = words.split_last()?;
    if head.is_empty() {
        return None;
    }
    let expanded = match last.trim_end_matches('.').to_lowercase().as_str() {
        "corp" => "Corporation",
        "inc" => "Incorporated",
        "co" => "Company",
        "ltd" => "Limited",
        _ => return None,
    };
    Some(format!("{} {}", head.join(" "), expanded))
}

/// A term of length <= 4 that is entirely upper-case is treated as an acronym
/// and matched case-sensitively, so "ACE" never scrubs "ace this call".
pub(crate) fn is_acronym(term: &str) -> bool {
    term.len() <= 4 && !term.is_empty() && term.chars().all(|c| c.is_ascii_uppercase())
}

/// Word-boundary pattern for a name-like term.
///
/// Possessives ("Acme's") and hyphen-compounds ("Acme-powered") are consumed
/// as part of the match so no orphaned suffix survives the replacement.
pub(crate) fn bounded_term_pattern(term: &str) -> Regex {
    let term = term.trim();
    let escaped = regex::escape(term);
    let prefix = if is_acronym(term) { "" } else { "(?i)" };
    // `\b` after a trailing non-word character (e.g. "Acme Inc.") never
    // matches, so only bound the tail when the term ends in a word character.
    let tail = if term.ends_with(|c: char| c.is_alphanumeric()) {
        r"(?:['’]s|-\w+)?\b"
    } else {
        ""
    };
    let pattern = format!(r"{prefix}\b{escaped}{tail}");
    Regex::new(&pattern).expect("escaped term is always a valid pattern")
}

/// Case-insensitive substring pattern for a domain-like term. Domains are not
/// bounded the way words are because `.` is not a word character.
pub(crate) fn substring_pattern(term: &str) -> Regex {
    let pattern = format!("(?i){}", regex::escape(term.trim()));
    Regex::new(&pattern).expect("escaped term is always a valid pattern")
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
