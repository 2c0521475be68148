//! Contact identity scrubbing.
//!
//! Runs in two passes around the term-replacement engine:
//!
//! 1. Before any term substitution, `"Name, Title [of/at Company]"` and
//!    `"Name (Title)"` attributions are replaced as a single unit with a
//!    seniority-anonymized phrase. Scrubbing the combined span produces
//!    natural prose and stops a name fragment from coincidentally matching
//!    part of the company name before the dedicated name pass.
//! 2. After term substitution, any bare contact name that appeared without
//!    its title is replaced with the anonymized title phrase when the title
//!    is known, else a generic team-member phrase.

use regex::Regex;

use crate::catalog::builder::bounded_term_pattern;
use crate::catalog::titles::{anonymize_title, GENERIC_CONTACT_PHRASE};
use crate::types::{Account, ScrubResult};

/// Minimum length for a bare contact name to be scrubbed in the residual
/// pass. Shorter strings are too likely to collide with ordinary prose.
const MIN_BARE_NAME_LEN: usize = 4;

/// Scrub `"Name, Title"`-style attributions (step 1 of the pipeline).
pub fn scrub_contact_attributions(text: &str, account: &Account) -> ScrubResult {
    let mut result = ScrubResult::unchanged(text);

    for contact in &account.contacts {
        if !contact.has_attribution() {
            continue;
        }
        let (name, title) = match (&contact.name, &contact.title) {
            (Some(name), Some(title)) => (name.trim(), title.trim()),
            _ => continue,
        };

        let phrase = anonymize_title(title);
        for pattern in attribution_patterns(name, title, account) {
            let count = pattern.find_iter(&result.scrubbed_text).count();
            if count > 0 {
                result.scrubbed_text = pattern
                    .replace_all(&result.scrubbed_text, phrase)
                    .into_owned();
                result.record(name, count);
            }
        }
    }

    result
}

/// Scrub bare contact names left over after the term passes (step 4).
///
/// Matches the full stored name only. A lone first name ("Jane said...") is
/// indistinguishable from ordinary prose and is left for editorial review.
pub fn scrub_residual_names(text: &str, account: &Account) -> ScrubResult {
    let mut result = ScrubResult::unchanged(text);

    for contact in &account.contacts {
        let name = match contact.name.as_deref().map(str::trim) {
            Some(name) if name.len() >= MIN_BARE_NAME_LEN => name,
            _ => continue,
        };

        let phrase = contact
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(anonymize_title)
            .unwrap_or(GENERIC_CONTACT_PHRASE);

        let pattern = bounded_term_pattern(name);
        let count = pattern.find_iter(&result.scrubbed_text).count();
        if count > 0 {
            result.scrubbed_text = pattern
                .replace_all(&result.scrubbed_text, phrase)
                .into_owned();
            result.record(name, count);
        }
    }

    result
}

/// Build the attribution patterns for one contact.
///
/// The optional `of/at <company>` tail only matches the account's own name
/// forms — consuming an arbitrary trailing word would corrupt unrelated
/// prose.
fn attribution_patterns(name: &str, title: &str, account: &Account) -> Vec<Regex> {
    let name = regex::escape(name);
    let title = regex::escape(title);

    let mut company_forms: Vec<String> = Vec::new();
    for form in [account.name.trim(), account.normalized_name.trim()] {
        if !form.is_empty() {
            company_forms.push(regex::escape(form));
        }
    }
    let company_tail = if company_forms.is_empty() {
        String::new()
    } else {
        format!(r"(?:\s+(?:of|at)\s+(?:{}))?", company_forms.join("|"))
    };

    let comma_form = format!(r"(?i)\b{name}\s*,\s*{title}{company_tail}\b");
    let paren_form = format!(r"(?i)\b{name}\s*\(\s*{title}\s*\)");

    [comma_form, paren_form]
        .into_iter()
        .map(|p| Regex::new(&p).expect("escaped attribution pattern is always valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{account_with_domain, contact};

    fn account_with_contact(name: &str, title: Option<&str>) -> Account {
        let mut account = account_with_domain("Acme Corp", "acme", "acme.com");
        account.contacts = vec![contact(Some(name), title)];
        account
    }

    #[test]
    fn test_comma_attribution_replaced_as_one_unit() {
        let account = account_with_contact("Jane Doe", Some("CEO"));
        let result =
            scrub_contact_attributions("Jane Doe, CEO of Acme Corp said it worked", &account);

        assert_eq!(
            result.scrubbed_text,
            "a senior executive at the client said it worked"
        );
        assert_eq!(result.replacements_made, 1);
    }

    #[test]
    fn test_attribution_without_company_tail() {
        let account = account_with_contact("Jane Doe", Some("CEO"));
        let result = scrub_contact_attributions("Per Jane Doe, CEO, the rollout went well", &account);

        assert_eq!(
            result.scrubbed_text,
            "Per a senior executive at the client, the rollout went well"
        );
    }

    #[test]
    fn test_parenthesized_attribution() {
        let account = account_with_contact("Jane Doe", Some("VP of Sales"));
        let result = scrub_contact_attributions("Jane Doe (VP of Sales) approved", &account);

        assert_eq!(result.scrubbed_text, "a senior leader at the client approved");
    }

    #[test]
    fn test_contact_without_title_not_matched_in_attribution_pass() {
        let account = account_with_contact("Jane Doe", None);
        let result = scrub_contact_attributions("Jane Doe said hi", &account);

        assert_eq!(result.replacements_made, 0);
        assert_eq!(result.scrubbed_text, "Jane Doe said hi");
    }

    #[test]
    fn test_residual_name_uses_title_phrase_when_known() {
        let account = account_with_contact("Jane Doe", Some("CTO"));
        let result = scrub_residual_names("Jane Doe loved the demo", &account);

        assert_eq!(
            result.scrubbed_text,
            "a senior executive at the client loved the demo"
        );
        assert!(result.terms_replaced.contains("Jane Doe"));
    }

    #[test]
    fn test_residual_name_without_title_uses_generic_phrase() {
        let account = account_with_contact("Jane Doe", None);
        let result = scrub_residual_names("jane doe loved the demo", &account);

        assert_eq!(result.scrubbed_text, "a team member at the client loved the demo");
    }

    #[test]
    fn test_residual_possessive_consumed() {
        let account = account_with_contact("Jane Doe", None);
        let result = scrub_residual_names("Jane Doe's team shipped it", &account);

        assert_eq!(
            result.scrubbed_text,
            "a team member at the client team shipped it"
        );
    }

    #[test]
    fn test_first_name_alone_not_scrubbed() {
        // Only the full stored name is matched; a first-name mention stays
        // as-is rather than risking false positives on common words.
        let account = account_with_contact("Jane Doe", Some("CEO"));
        let result = scrub_residual_names("Jane said the demo went well", &account);

        assert_eq!(result.replacements_made, 0);
        assert_eq!(result.scrubbed_text, "Jane said the demo went well");
    }

    #[test]
    fn test_short_names_left_alone() {
        let account = account_with_contact("Bo", None);
        let result = scrub_residual_names("Bo said hi", &account);

        assert_eq!(result.replacements_made, 0);
    }
}
