//! Identity Scrubbing & Publish-Safety Validation
//!
//! Rewrites client company and contact identifiers in AI-generated customer
//! narratives into neutral language, then independently re-verifies the
//! output before it may be published. The contractual promise behind this
//! library: no content identifying the client company or its staff ever
//! appears in the public artifact.
//!
//! # Design Philosophy
//!
//! **Never trust a single pass**
//!
//! - Aggressive matching (casings, inflections, compounds) in the engine
//! - A second, deliberately simpler leakage check that shares none of the
//!   engine's derivation logic
//! - Structural validation on both sides of the scrub
//! - Every component a synchronous pure function — no caching, no retained
//!   state, so Account changes are reflected on the very next call
//!
//! # Usage
//!
//! ```rust,ignore
//! use scrubbing::{publish_scrub, scrub_page, PublishError};
//!
//! // Preview what would change (no safety claim)
//! let preview = scrub_page(&account, &custom_mappings, &content);
//!
//! // Gated pipeline: validate -> scrub -> leakage check -> validate
//! match publish_scrub(&account, &custom_mappings, &content) {
//!     Ok(scrubbed) => persist_snapshot(scrubbed),
//!     Err(PublishError::Validation { issues, .. }) => show_issues(issues),
//!     Err(PublishError::Leakage(leak)) => abort_publish(leak.leaked_terms),
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - Account/Contact graph and page content types
//! - [`catalog`] - term catalog builder and title anonymization table
//! - [`pipeline`] - scrub passes, leakage detection, validation, orchestration
//! - [`testing`] - fixture builders for tests

pub mod catalog;
pub mod error;
pub mod pipeline;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use error::{LeakageError, PublishError, Result};
pub use types::{Account, CalloutBox, Contact, PageContent, ScrubResult, ScrubbedPage};

// Re-export catalog components
pub use catalog::{
    anonymize_title, build_term_catalog, ScrubTerm, TermCatalog, TermReplacement,
    COMPANY_PLACEHOLDER, DOMAIN_PLACEHOLDER, GENERIC_CONTACT_PHRASE,
};

// Re-export pipeline components
pub use pipeline::{
    publish_scrub, scrub_page, scrub_text, validate_page, verify_no_leakage, IssueCode,
    PublishPhase, PublishValidationIssue, ValidationPhase,
};
