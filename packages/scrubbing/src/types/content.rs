//! Narrative page fragments handed in by the content editor.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Raw (un-scrubbed) page content for a customer narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,

    #[serde(default)]
    pub subtitle: Option<String>,

    /// Markdown body
    pub body: String,

    #[serde(default)]
    pub callout_boxes: Vec<CalloutBox>,
}

/// A highlighted quote/stat box on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalloutBox {
    pub title: String,
    pub body: String,
}

/// Fully scrubbed page plus aggregate counts across every fragment.
///
/// `terms_replaced` keeps insertion order so the preview UI can show which
/// identifiers were hit, in the order the pipeline encountered them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubbedPage {
    pub content: PageContent,
    pub replacements_made: usize,
    pub terms_replaced: IndexSet<String>,
}

impl PageContent {
    /// All text fragments with their field paths, in display order.
    ///
    /// Field paths match the ones the publish validator reports issues
    /// against, so errors and previews line up.
    pub fn fragments(&self) -> Vec<(String, &str)> {
        let mut fragments = vec![("title".to_string(), self.title.as_str())];
        if let Some(subtitle) = &self.subtitle {
            fragments.push(("subtitle".to_string(), subtitle.as_str()));
        }
        fragments.push(("body".to_string(), self.body.as_str()));
        for (i, callout) in self.callout_boxes.iter().enumerate() {
            fragments.push((format!("callout_boxes[{i}].title"), callout.title.as_str()));
            fragments.push((format!("callout_boxes[{i}].body"), callout.body.as_str()));
        }
        fragments
    }
}
