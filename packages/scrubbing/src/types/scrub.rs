//! Per-fragment scrub output.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Result of scrubbing one text fragment.
///
/// Ephemeral: derived fresh on every call so alias changes on the Account are
/// reflected at the very next publish attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubResult {
    pub scrubbed_text: String,

    /// Total substitutions across all scrub passes
    pub replacements_made: usize,

    /// Deduplicated labels of the terms that were hit (for the preview UI)
    pub terms_replaced: IndexSet<String>,
}

impl ScrubResult {
    /// An untouched fragment.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            scrubbed_text: text.into(),
            replacements_made: 0,
            terms_replaced: IndexSet::new(),
        }
    }

    /// Record `count` hits against `label` (no-op when `count` is zero).
    pub fn record(&mut self, label: &str, count: usize) {
        if count > 0 {
            self.replacements_made += count;
            self.terms_replaced.insert(label.to_string());
        }
    }
}
