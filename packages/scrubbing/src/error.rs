//! Typed errors for the scrubbing library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the publish
//! workflow can match on the two failure shapes and build the right
//! user-facing response.

use thiserror::Error;

use crate::pipeline::validate::{PublishValidationIssue, ValidationPhase};

/// Errors that abort a publish attempt.
///
/// Both variants propagate synchronously to the publish workflow, which owns
/// transactional rollback — scrubbed fields reach storage only after every
/// stage succeeds.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Structural completeness check failed. Recoverable: the author adds
    /// content and re-invokes the pipeline.
    #[error("structural validation failed ({phase}): {} issue(s)", issues.len())]
    Validation {
        phase: ValidationPhase,
        issues: Vec<PublishValidationIssue>,
    },

    /// Anonymization failed. Never auto-recovered; always aborts publish.
    #[error(transparent)]
    Leakage(#[from] LeakageError),
}

/// Residual client identifiers survived scrubbing.
///
/// The message enumerates the leaked terms (bounded to 10) so an operator
/// can extend the custom mapping and retry.
#[derive(Debug, Clone, Error)]
#[error("client identifiers leaked into scrubbed output: {}", leaked_terms.join(", "))]
pub struct LeakageError {
    pub leaked_terms: Vec<String>,
}

/// Result type alias for publish operations.
pub type Result<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::validate::IssueCode;

    #[test]
    fn test_leakage_message_enumerates_terms() {
        let err = LeakageError {
            leaked_terms: vec!["acme".to_string(), "acme.com".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "client identifiers leaked into scrubbed output: acme, acme.com"
        );
    }

    #[test]
    fn test_validation_message_names_phase() {
        let err = PublishError::Validation {
            phase: ValidationPhase::PostScrub,
            issues: vec![PublishValidationIssue {
                field: "body".to_string(),
                code: IssueCode::BodyTooShort,
                message: "too short".to_string(),
            }],
        };
        assert_eq!(
            err.to_string(),
            "structural validation failed (post-scrub): 1 issue(s)"
        );
    }
}
