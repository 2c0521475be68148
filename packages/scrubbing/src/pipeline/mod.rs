//! The scrubbing pipeline, stage by stage.
//!
//! - [`contacts`] - contact attribution and residual-name scrubbing
//! - [`replace`] - term replacement engine (domains, then names)
//! - [`leakage`] - independent post-scrub verification
//! - [`validate`] - structural publish validation
//! - [`publish`] - orchestration and phase sequencing

pub mod contacts;
pub mod leakage;
pub mod publish;
pub mod replace;
pub mod validate;

pub use leakage::verify_no_leakage;
pub use publish::{publish_scrub, scrub_page, PublishPhase};
pub use replace::scrub_text;
pub use validate::{validate_page, IssueCode, PublishValidationIssue, ValidationPhase};
