//! Flattened text output

use serde::{Deserialize, Serialize};

/// Rendered text of a subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flattened {
    /// Text, possibly cut and suffixed with the ellipsis marker
    pub content: String,
    /// Whether the display cap was applied
    pub truncated: bool,
    /// Length of the untruncated text, in characters
    pub total_length: usize,
    /// Characters of the text kept in `content`, ellipsis excluded
    #[serde(default)]
    pub shown_length: usize,
}

impl Flattened {
    /// Wrap text that was not cut
    pub fn complete(content: String) -> Self {
        let total_length = content.chars().count();
        Self {
            content,
            truncated: false,
            total_length,
            shown_length: total_length,
        }
    }

    /// Notice shown next to a truncated display pane
    pub fn notice(&self) -> Option<String> {
        self.truncated.then(|| {
            format!(
                "Showing {} of {} characters; the full text is used for generation.",
                self.shown_length,
                self.total_length
            )
        })
    }
}
