//! Independent leakage detection.
//!
//! Re-derives a deliberately minimal identifier set straight from the
//! Account — NOT the replacement engine's term catalog — and scans the
//! already-scrubbed fragments. Sharing the catalog would share the engine's
//! blind spots, which defeats the point of a second verification layer.
//!
//! Any residual match is a hard stop. Leakage is a contractual failure and
//! is never logged-and-continued.

use indexmap::IndexSet;
use regex::Regex;

use crate::error::LeakageError;
use crate::types::Account;

/// At most this many distinct leaked terms are reported back to the
/// operator.
const MAX_REPORTED_TERMS: usize = 10;

/// Minimum identifier length considered; below that the false-positive rate
/// on ordinary prose is too high.
const MIN_CANDIDATE_LEN: usize = 3;

/// Scan scrubbed fragments for residual identifiers.
///
/// Returns `Err(LeakageError)` carrying up to 10 distinct leaked terms so an
/// operator can extend the custom mapping and retry.
pub fn verify_no_leakage<'a, I>(fragments: I, account: &Account) -> Result<(), LeakageError>
where
    I: IntoIterator<Item = &'a str>,
{
    let candidates = identifier_candidates(account);
    let mut leaked: IndexSet<String> = IndexSet::new();

    for fragment in fragments {
        let haystack = fragment.to_lowercase();
        for candidate in &candidates {
            if leaked.len() >= MAX_REPORTED_TERMS {
                break;
            }
            if candidate_matches(candidate, &haystack) {
                leaked.insert(candidate.clone());
            }
        }
    }

    if leaked.is_empty() {
        Ok(())
    } else {
        Err(LeakageError {
            leaked_terms: leaked.into_iter().collect(),
        })
    }
}

/// Minimal identifier set: name, normalized name, domain, aliases. Lowercased
/// and length-filtered, nothing else — no variant generation.
fn identifier_candidates(account: &Account) -> IndexSet<String> {
    let mut candidates = IndexSet::new();

    let mut push = |value: &str| {
        let value = value.trim().to_lowercase();
        if value.len() >= MIN_CANDIDATE_LEN {
            candidates.insert(value);
        }
    };

    push(&account.name);
    push(&account.normalized_name);
    if let Some(domain) = &account.domain {
        push(domain);
    }
    for alias in &account.domain_aliases {
        push(alias);
    }

    candidates
}

/// Domain-like candidates (containing `.`) match as substrings; name-like
/// candidates match on word boundaries.
fn candidate_matches(candidate: &str, haystack: &str) -> bool {
    if candidate.contains('.') {
        return haystack.contains(candidate);
    }
    let pattern = format!(r"\b{}\b", regex::escape(candidate));
    Regex::new(&pattern)
        .expect("escaped candidate is always a valid pattern")
        .is_match(haystack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::account_with_domain;

    #[test]
    fn test_clean_text_passes() {
        let account = account_with_domain("Acme Corp", "acme", "acme.com");
        let result = verify_no_leakage(
            ["the client shipped fast", "sales@example.com responded"],
            &account,
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_verbatim_name_caught_even_without_the_name_pass() {
        // Simulates an incomplete scrub that omitted the name pass entirely.
        let account = account_with_domain("Acme Corp", "acme", "acme.com");
        let err = verify_no_leakage(["Acme Corp shipped fast"], &account).unwrap_err();

        assert!(err.leaked_terms.contains(&"acme corp".to_string()));
        assert!(err.leaked_terms.contains(&"acme".to_string()));
    }

    #[test]
    fn test_domain_caught_as_substring() {
        let account = account_with_domain("Acme Corp", "acme", "acme.com");
        let err = verify_no_leakage(["reach us at sales@acme.com"], &account).unwrap_err();

        assert_eq!(err.leaked_terms, vec!["acme".to_string(), "acme.com".to_string()]);
    }

    #[test]
    fn test_name_requires_word_boundary() {
        // "acme" inside another word is not a leak.
        let account = account_with_domain("Acme", "acme", "acme.com");
        let result = verify_no_leakage(["the acmeist poetry movement"], &account);

        assert!(result.is_ok());
    }

    #[test]
    fn test_short_identifiers_skipped() {
        let account = account_with_domain("Ab", "ab", "ab.io");
        // "ab" is below the minimum candidate length; "ab.io" (5) is not.
        let err = verify_no_leakage(["ab built ab.io"], &account).unwrap_err();

        assert_eq!(err.leaked_terms, vec!["ab.io".to_string()]);
    }

    #[test]
    fn test_reported_terms_capped_at_ten() {
        let mut account = account_with_domain("Acme Corp", "acme", "acme.com");
        account.domain_aliases = (0..15).map(|i| format!("acme{i}.com")).collect();

        let body: String = (0..15)
            .map(|i| format!("acme{i}.com "))
            .collect::<String>();
        let err = verify_no_leakage([body.as_str()], &account).unwrap_err();

        assert_eq!(err.leaked_terms.len(), 10);
    }
}
