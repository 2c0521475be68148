//! Publish pipeline orchestration.
//!
//! Sequences validation, scrubbing, and leakage detection:
//!
//! ```text
//! Draft -> PreValidating -> Scrubbing -> LeakageCheck -> PostValidating -> Published
//! ```
//!
//! Failures are terminal for the attempt — every stage is a cheap pure
//! function, so the caller re-invokes the whole pipeline after fixing the
//! content rather than retrying an individual stage. Nothing here is cached:
//! a domain alias added between attempts is picked up on the next call.

use indexmap::IndexSet;
use tracing::{debug, info};

use crate::catalog::builder::build_term_catalog;
use crate::error::{PublishError, Result};
use crate::pipeline::leakage::verify_no_leakage;
use crate::pipeline::replace::scrub_text;
use crate::pipeline::validate::{validate_page, ValidationPhase};
use crate::types::{Account, CalloutBox, PageContent, ScrubbedPage};

/// Pipeline phases, in order. Purely informational — the pipeline holds no
/// retained state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    Draft,
    PreValidating,
    Scrubbing,
    LeakageCheck,
    PostValidating,
    Published,
}

/// Run the full gated pipeline for one narrative page.
///
/// On success the returned [`ScrubbedPage`] is safe to persist as the
/// published snapshot. On failure nothing may be persisted — the two error
/// variants are distinguishable so the publish workflow can build the right
/// user-facing response.
///
/// The scrub result is never treated as proof of safety on its own; the
/// independent leakage check always runs before the published transition.
pub fn publish_scrub(
    account: &Account,
    custom_mappings: &[(String, String)],
    content: &PageContent,
) -> Result<ScrubbedPage> {
    debug!(account_id = %account.id, phase = ?PublishPhase::PreValidating, "validating draft");
    let issues = validate_page(content, ValidationPhase::PreScrub);
    if !issues.is_empty() {
        return Err(PublishError::Validation {
            phase: ValidationPhase::PreScrub,
            issues,
        });
    }

    debug!(account_id = %account.id, phase = ?PublishPhase::Scrubbing, "scrubbing fragments");
    let scrubbed = scrub_page(account, custom_mappings, content);

    debug!(account_id = %account.id, phase = ?PublishPhase::LeakageCheck, "verifying scrubbed output");
    let fragments: Vec<&str> = scrubbed
        .content
        .fragments()
        .into_iter()
        .map(|(_, text)| text)
        .collect();
    verify_no_leakage(fragments, account)?;

    debug!(account_id = %account.id, phase = ?PublishPhase::PostValidating, "re-validating scrubbed page");
    let issues = validate_page(&scrubbed.content, ValidationPhase::PostScrub);
    if !issues.is_empty() {
        return Err(PublishError::Validation {
            phase: ValidationPhase::PostScrub,
            issues,
        });
    }

    info!(
        account_id = %account.id,
        replacements = scrubbed.replacements_made,
        terms = scrubbed.terms_replaced.len(),
        "narrative page cleared for publish"
    );
    Ok(scrubbed)
}

/// Scrub every fragment of a page without the validator/leakage gates.
///
/// This is the preview path for the audit UI: it reports what would change
/// but makes no safety claim. Publishing must go through [`publish_scrub`].
pub fn scrub_page(
    account: &Account,
    custom_mappings: &[(String, String)],
    content: &PageContent,
) -> ScrubbedPage {
    // Rebuilt on every call so alias changes are always reflected.
    let catalog = build_term_catalog(account, custom_mappings);

    let mut replacements_made = 0;
    let mut terms_replaced: IndexSet<String> = IndexSet::new();

    let mut scrub = |text: &str| {
        let result = scrub_text(text, &catalog, account);
        replacements_made += result.replacements_made;
        terms_replaced.extend(result.terms_replaced);
        result.scrubbed_text
    };

    let title = scrub(&content.title);
    let subtitle = content.subtitle.as_deref().map(&mut scrub);
    let body = scrub(&content.body);
    let callout_boxes = content
        .callout_boxes
        .iter()
        .map(|callout| CalloutBox {
            title: scrub(&callout.title),
            body: scrub(&callout.body),
        })
        .collect();

    ScrubbedPage {
        content: PageContent {
            title,
            subtitle,
            body,
            callout_boxes,
        },
        replacements_made,
        terms_replaced,
    }
}
