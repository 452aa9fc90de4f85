//! Content flattening
//!
//! Renders a node and its whole descendant chain as one ordered text:
//! depth-first pre-order, siblings by order key. Each node becomes a block
//! of lines and blocks are separated by one blank line.
//!
//! Numbered nodes print their identifier then their text (unless the text
//! repeats the identifier). Subsections print their heading once, since
//! their title and content are usually the same string. The root's own
//! heading is left to the caller; only its body is printed, and not at all
//! for subsections.

use crate::domain::entities::{Flattened, Node};
use crate::domain::services::ancestry::{Ancestry, DEFAULT_MAX_DEPTH};

/// Default cap for display-mode output, in characters
pub const DEFAULT_DISPLAY_MAX_CHARS: usize = 2000;

/// Default marker appended to truncated display output
pub const DEFAULT_ELLIPSIS: &str = "...";

/// Output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenMode {
    /// Capped for display panes
    Display,
    /// Uncapped, for the text generator
    Full,
}

/// Flattens subtrees into text
#[derive(Debug, Clone)]
pub struct Flattener {
    display_max_chars: usize,
    ellipsis: String,
    max_depth: usize,
}

impl Default for Flattener {
    fn default() -> Self {
        Self {
            display_max_chars: DEFAULT_DISPLAY_MAX_CHARS,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display cap
    pub fn with_display_max_chars(mut self, max: usize) -> Self {
        self.display_max_chars = max;
        self
    }

    /// Set the truncation marker
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Set the ancestry depth bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn display_max_chars(&self) -> usize {
        self.display_max_chars
    }

    /// Flatten `root` and its descendants found in `all_nodes`
    pub fn flatten(&self, root: &Node, all_nodes: &[Node], mode: FlattenMode) -> Flattened {
        let text = self.render(root, all_nodes);
        match mode {
            FlattenMode::Full => Flattened::complete(text),
            FlattenMode::Display => self.cap(text),
        }
    }

    fn render(&self, root: &Node, all_nodes: &[Node]) -> String {
        let ancestry = Ancestry::resolve(all_nodes, self.max_depth);
        let children = ancestry.sorted_children();

        let mut blocks = Vec::new();
        if !root.kind.repeats_heading() {
            let body = root.content.trim();
            if !body.is_empty() {
                blocks.push(body.to_string());
            }
        }

        let mut stack: Vec<usize> = Self::top_level(&ancestry, &children, root);
        stack.reverse();
        while let Some(idx) = stack.pop() {
            let block = node_block(ancestry.nodes()[idx]);
            if !block.is_empty() {
                blocks.push(block);
            }
            stack.extend(children[idx].iter().rev());
        }

        blocks.join("\n\n").trim().to_string()
    }

    /// Children of the root. A root that is not in the list (or lost to a
    /// duplicate) still finds the nodes that name it as parent; those are
    /// roots of the resolved forest because their parent did not resolve.
    fn top_level(ancestry: &Ancestry<'_>, children: &[Vec<usize>], root: &Node) -> Vec<usize> {
        match ancestry.index_of(&root.id) {
            Some(idx) => children[idx].clone(),
            None => ancestry
                .sorted_roots()
                .into_iter()
                .filter(|idx| ancestry.nodes()[*idx].parent_id.as_ref() == Some(&root.id))
                .collect(),
        }
    }

    fn cap(&self, text: String) -> Flattened {
        let total_length = text.chars().count();
        if total_length <= self.display_max_chars {
            return Flattened::complete(text);
        }

        let mut content: String = text.chars().take(self.display_max_chars).collect();
        content.push_str(&self.ellipsis);
        Flattened {
            content,
            truncated: true,
            total_length,
            shown_length: self.display_max_chars,
        }
    }
}

/// Lines contributed by one descendant
fn node_block(node: &Node) -> String {
    let title = node.title.trim();
    let content = node.content.trim();

    let lines: Vec<&str> = if node.kind.repeats_heading() {
        vec![if content.is_empty() { title } else { content }]
    } else if content == title {
        // identifier or heading, then the text only when it differs
        vec![title]
    } else {
        vec![title, content]
    };

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
