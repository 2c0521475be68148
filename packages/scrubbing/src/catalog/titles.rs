//! Seniority-preserving job title anonymization.
//!
//! The table is an explicit ordered list evaluated top-to-bottom with
//! first-match-wins. Ordering is a correctness invariant: "Senior Vice
//! President" must be tested before bare "President", otherwise the general
//! pattern consumes the specific title's substring.

use lazy_static::lazy_static;
use regex::Regex;

/// Fallback phrase when no table entry matches (and for contacts with an
/// unknown title).
pub const GENERIC_CONTACT_PHRASE: &str = "a team member at the client";

lazy_static! {
    /// Ordered (pattern, phrase) pairs, most-specific first.
    static ref TITLE_TABLE: Vec<(Regex, &'static str)> = vec![
        (
            Regex::new(r"(?i)\b(?:senior|executive)\s+vice\s+president\b|\b[se]vp\b").unwrap(),
            "a senior executive at the client",
        ),
        (
            Regex::new(r"(?i)\bvice\s+president\b|\bvp\b").unwrap(),
            "a senior leader at the client",
        ),
        (
            Regex::new(r"(?i)\bchief\s+\w+(?:\s+\w+)?\s+officer\b").unwrap(),
            "a senior executive at the client",
        ),
        (
            Regex::new(r"(?i)\b(?:ceo|cto|cfo|coo|cio|ciso|cmo|cpo|cro)\b").unwrap(),
            "a senior executive at the client",
        ),
        (
            Regex::new(r"(?i)\bco-?founder\b|\bfounder\b").unwrap(),
            "a founder at the client",
        ),
        (
            Regex::new(r"(?i)\bpresident\b").unwrap(),
            "a senior executive at the client",
        ),
        (
            Regex::new(r"(?i)\bhead\s+of\b").unwrap(),
            "a department head at the client",
        ),
        (
            Regex::new(r"(?i)\bdirector\b").unwrap(),
            "a director at the client",
        ),
        (
            Regex::new(r"(?i)\b(?:manager|lead|supervisor)\b").unwrap(),
            "a team lead at the client",
        ),
        (
            Regex::new(r"(?i)\b(?:engineer|developer|architect|administrator)\b").unwrap(),
            "an engineer at the client",
        ),
        (
            Regex::new(r"(?i)\b(?:analyst|specialist|consultant|coordinator)\b").unwrap(),
            "a specialist at the client",
        ),
    ];
}

/// Map a job title to its anonymized, seniority-preserving phrase.
pub fn anonymize_title(title: &str) -> &'static str {
    for (pattern, phrase) in TITLE_TABLE.iter() {
        if pattern.is_match(title) {
            return phrase;
        }
    }
    GENERIC_CONTACT_PHRASE
}
