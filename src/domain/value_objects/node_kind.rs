//! NodeKind value object - the structural unit a node represents
//!
//! The kind set is closed, so every kind-keyed rule (heading rendering,
//! selectability) is a match on this enum or a set of its variants.

use serde::{Deserialize, Serialize};

use crate::error::LegisError;

/// Structural kind of a legal-text node.
///
/// Variant order follows the usual nesting convention (book outermost,
/// subitem innermost). It is not a containment rule: the parent pointers
/// decide the actual tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Book,
    Part,
    Title,
    Chapter,
    Section,
    Subsection,
    #[default]
    Article,
    Paragraph,
    Clause,
    Item,
    Subitem,
}

impl NodeKind {
    /// Every kind, outermost first
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Book,
        NodeKind::Part,
        NodeKind::Title,
        NodeKind::Chapter,
        NodeKind::Section,
        NodeKind::Subsection,
        NodeKind::Article,
        NodeKind::Paragraph,
        NodeKind::Clause,
        NodeKind::Item,
        NodeKind::Subitem,
    ];

    /// Kinds whose `content` repeats their heading, so the heading is
    /// printed once and never as a body.
    pub fn repeats_heading(&self) -> bool {
        matches!(self, NodeKind::Subsection)
    }

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Book => "book",
            NodeKind::Part => "part",
            NodeKind::Title => "title",
            NodeKind::Chapter => "chapter",
            NodeKind::Section => "section",
            NodeKind::Subsection => "subsection",
            NodeKind::Article => "article",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Clause => "clause",
            NodeKind::Item => "item",
            NodeKind::Subitem => "subitem",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = LegisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| LegisError::UnknownNodeKind {
                kind: s.to_string(),
            })
    }
}

/// The kinds a user may toggle directly.
///
/// Everything else only enters a selection through an ancestor's cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectableKinds(Vec<NodeKind>);

impl SelectableKinds {
    /// Build a selectable set, dropping repeated kinds
    pub fn new(kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self(unique)
    }

    /// Whether nodes of `kind` can be toggled directly
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &[NodeKind] {
        &self.0
    }
}

impl Default for SelectableKinds {
    fn default() -> Self {
        Self::new([NodeKind::Title, NodeKind::Chapter, NodeKind::Subsection])
    }
}
