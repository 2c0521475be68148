//! Structural publish validation.
//!
//! Completeness checks only — independent of anonymization correctness. The
//! full issue list is always collected; validation never fails fast, so the
//! author sees every problem in one round trip.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::PageContent;

/// Minimum title length in characters.
const MIN_TITLE_CHARS: usize = 3;
/// Minimum body length after markdown punctuation is stripped.
const MIN_BODY_CHARS: usize = 40;
/// Minimum body word count after stripping.
const MIN_BODY_WORDS: usize = 8;

/// Which side of the scrub the validator is running on.
///
/// Pre-scrub rejects obviously incomplete drafts before any scrubbing effort;
/// post-scrub catches aggressive replacement collapsing a short paragraph
/// below the usability threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPhase {
    PreScrub,
    PostScrub,
}

impl std::fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPhase::PreScrub => write!(f, "pre-scrub"),
            ValidationPhase::PostScrub => write!(f, "post-scrub"),
        }
    }
}

/// Machine-readable issue codes, stable across releases (the publish workflow
/// keys UI copy off them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    TitleTooShort,
    BodyRequired,
    BodyTooShort,
    CalloutTitleRequired,
    CalloutBodyRequired,
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            IssueCode::TitleTooShort => "title_too_short",
            IssueCode::BodyRequired => "body_required",
            IssueCode::BodyTooShort => "body_too_short",
            IssueCode::CalloutTitleRequired => "callout_title_required",
            IssueCode::CalloutBodyRequired => "callout_body_required",
        };
        write!(f, "{code}")
    }
}

/// One structural problem with the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishValidationIssue {
    pub field: String,
    pub code: IssueCode,
    pub message: String,
}

impl PublishValidationIssue {
    fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

lazy_static! {
    /// Markdown punctuation stripped before measuring body length.
    static ref MARKDOWN_PUNCT: Regex = Regex::new(r"[#*_`~>\[\]()|!-]").unwrap();
}

/// Validate page structure, returning every issue found.
pub fn validate_page(content: &PageContent, phase: ValidationPhase) -> Vec<PublishValidationIssue> {
    let mut issues = Vec::new();

    if content.title.trim().chars().count() < MIN_TITLE_CHARS {
        issues.push(PublishValidationIssue::new(
            "title",
            IssueCode::TitleTooShort,
            format!("title must be at least {MIN_TITLE_CHARS} characters ({phase})"),
        ));
    }

    let body = content.body.trim();
    if body.is_empty() {
        issues.push(PublishValidationIssue::new(
            "body",
            IssueCode::BodyRequired,
            format!("body is required ({phase})"),
        ));
    } else {
        let stripped = MARKDOWN_PUNCT.replace_all(body, " ");
        let words = stripped.split_whitespace().count();
        let chars = stripped.split_whitespace().collect::<Vec<_>>().join(" ").chars().count();
        if chars < MIN_BODY_CHARS || words < MIN_BODY_WORDS {
            issues.push(PublishValidationIssue::new(
                "body",
                IssueCode::BodyTooShort,
                format!(
                    "body must contain at least {MIN_BODY_WORDS} words and {MIN_BODY_CHARS} characters ({phase})"
                ),
            ));
        }
    }

    for (i, callout) in content.callout_boxes.iter().enumerate() {
        if callout.title.trim().is_empty() {
            issues.push(PublishValidationIssue::new(
                format!("callout_boxes[{i}].title"),
                IssueCode::CalloutTitleRequired,
                format!("callout box {i} is missing a title ({phase})"),
            ));
        }
        if callout.body.trim().is_empty() {
            issues.push(PublishValidationIssue::new(
                format!("callout_boxes[{i}].body"),
                IssueCode::CalloutBodyRequired,
                format!("callout box {i} is missing a body ({phase})"),
            ));
        }
    }

    issues
}
