//! Term replacement engine.
//!
//! Applies the four scrub passes in their contractual order, each pass
//! consuming the text produced by the previous one:
//!
//! 1. contact attribution units ("Name, Title")
//! 2. domains and aliases (substring, before names — the company name is
//!    often a substring of the domain)
//! 3. company-name variants, longest-label-first with word boundaries
//! 4. residual bare contact names

use regex::NoExpand;
use tracing::debug;

use crate::catalog::builder::TermCatalog;
use crate::pipeline::contacts::{scrub_contact_attributions, scrub_residual_names};
use crate::types::{Account, ScrubResult};

/// Scrub one text fragment against a prebuilt catalog.
///
/// Pure function: no side effects, no error conditions. An Account with no
/// domain or contacts simply yields fewer passes.
pub fn scrub_text(text: &str, catalog: &TermCatalog, account: &Account) -> ScrubResult {
    let mut result = scrub_contact_attributions(text, account);

    for term in catalog.domain_terms.iter().chain(&catalog.name_terms) {
        let count = term.pattern.find_iter(&result.scrubbed_text).count();
        if count > 0 {
            // NoExpand: admin-supplied replacement text must never be
            // interpreted as capture references.
            result.scrubbed_text = term
                .pattern
                .replace_all(&result.scrubbed_text, NoExpand(term.replacement_text()))
                .into_owned();
            result.record(&term.label, count);
        }
    }

    let residual = scrub_residual_names(&result.scrubbed_text, account);
    result.scrubbed_text = residual.scrubbed_text;
    result.replacements_made += residual.replacements_made;
    result.terms_replaced.extend(residual.terms_replaced);

    debug!(
        replacements = result.replacements_made,
        terms = result.terms_replaced.len(),
        "scrubbed fragment"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builder::build_term_catalog;
    use crate::testing::{account_with_domain, contact};

    fn scrub(account: &Account, text: &str) -> ScrubResult {
        let catalog = build_term_catalog(account, &[]);
        scrub_text(text, &catalog, account)
    }

    #[test]
    fn test_longest_match_precedence() {
        let account = account_with_domain("Acme Corp", "acme", "acme.com");
        let result = scrub(&account, "Acme Corporation works with Acme.");

        // The shorter variant must not clobber the longer variant's match
        // window and leave a dangling "Corporation".
        assert!(!result.scrubbed_text.contains("Corporation"));
        assert_eq!(result.scrubbed_text, "the client works with the client.");
    }

    #[test]
    fn test_acronym_matched_case_sensitively() {
        let account = account_with_domain("ACE", "ace", "ace-corp.com");
        let result = scrub(&account, "Ask ACE support. Please ace this call.");

        assert_eq!(
            result.scrubbed_text,
            "Ask the client support. Please ace this call."
        );
        assert_eq!(result.replacements_made, 1);
    }

    #[test]
    fn test_possessive_consumed_with_the_match() {
        let account = account_with_domain("Acme", "acme", "acme.com");
        let result = scrub(&account, "Acme's platform is fast");

        assert_eq!(result.scrubbed_text, "the client platform is fast");
        assert!(!result.scrubbed_text.contains("'s platform"));
    }

    #[test]
    fn test_hyphen_compound_consumed_with_the_match() {
        let account = account_with_domain("Acme", "acme", "acme.com");
        let result = scrub(&account, "An Acme-powered workflow");

        assert_eq!(result.scrubbed_text, "An the client workflow");
    }

    #[test]
    fn test_domain_scrubbed_before_name() {
        let account = account_with_domain("Acme", "acme", "acme.com");
        let result = scrub(&account, "Contact sales@acme.com about Acme's roadmap");

        assert_eq!(
            result.scrubbed_text,
            "Contact sales@example.com about the client roadmap"
        );
        // One domain substitution plus one name substitution — never a
        // malformed mixed token.
        assert_eq!(result.replacements_made, 2);
        assert!(result.terms_replaced.contains("acme.com"));
        assert!(result.terms_replaced.contains("Acme"));
    }

    #[test]
    fn test_prefix_domain_does_not_split_longer_alias() {
        let mut account = account_with_domain("Acme Corp", "acme", "acme.co");
        account.domain_aliases = vec!["acme.com".to_string()];
        let result = scrub(&account, "Reach sales@acme.com today");

        // The longer alias must win the overlapping window; substituting the
        // prefix first would leave "sales@example.comm".
        assert_eq!(result.scrubbed_text, "Reach sales@example.com today");
        assert!(result.terms_replaced.contains("acme.com"));
    }

    #[test]
    fn test_domain_alias_scrubbed() {
        let mut account = account_with_domain("Acme", "acme", "acme.com");
        account.domain_aliases = vec!["acmecloud.io".to_string()];
        let result = scrub(&account, "Hosted at app.acmecloud.io since 2021");

        assert_eq!(result.scrubbed_text, "Hosted at app.example.com since 2021");
    }

    #[test]
    fn test_word_boundary_protects_unrelated_words() {
        let account = account_with_domain("Cart", "cart", "cart.io");
        let result = scrub(&account, "Cart carted the cartography off");

        // Only the exact word form is scrubbed, never substrings of other
        // words.
        assert_eq!(result.scrubbed_text, "the client carted the cartography off");
    }

    #[test]
    fn test_custom_mapping_applied_with_precedence() {
        let account = account_with_domain("Acme", "acme", "acme.com");
        let custom = vec![(
            "Project Neptune".to_string(),
            "an internal initiative".to_string(),
        )];
        let catalog = build_term_catalog(&account, &custom);
        let result = scrub_text("Acme launched Project Neptune", &catalog, &account);

        assert_eq!(
            result.scrubbed_text,
            "the client launched an internal initiative"
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let mut account = account_with_domain("Acme Data Systems", "acme", "acmedata.com");
        account.contacts = vec![contact(Some("Jane Doe"), Some("CEO"))];
        let catalog = build_term_catalog(&account, &[]);

        let text = "Jane Doe, CEO of Acme Data Systems said sales@acmedata.com \
                    loves the ADS rollout. Acme's team agrees.";
        let first = scrub_text(text, &catalog, &account);
        let second = scrub_text(&first.scrubbed_text, &catalog, &account);

        assert_eq!(second.replacements_made, 0);
        assert_eq!(second.scrubbed_text, first.scrubbed_text);
    }

    #[test]
    fn test_account_without_domain_or_contacts() {
        let mut account = account_with_domain("Acme", "acme", "acme.com");
        account.domain = None;
        account.contacts = vec![];
        let catalog = build_term_catalog(&account, &[]);
        let result = scrub_text("Acme shipped", &catalog, &account);

        assert_eq!(result.scrubbed_text, "the client shipped");
    }
}
