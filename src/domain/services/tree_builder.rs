//! Tree construction from flat node lists
//!
//! Wraps every node, attaches it under its effective parent and sorts each
//! sibling group by order key. Input order breaks ties, so the result does
//! not depend on how the persistence layer happened to sort its rows.

use crate::domain::entities::{Node, TreeNode};
use crate::domain::services::ancestry::{Ancestry, AncestryBreak, DEFAULT_MAX_DEPTH};

/// Builds forests of [`TreeNode`]s from flat node lists
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl TreeBuilder {
    /// Create a builder that cuts parent chains deeper than `max_depth`
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build an ordered forest
    pub fn build(&self, nodes: &[Node]) -> Vec<TreeNode> {
        self.build_with_report(nodes).0
    }

    /// Build an ordered forest and report the parent links that were cut
    pub fn build_with_report(&self, nodes: &[Node]) -> (Vec<TreeNode>, Vec<AncestryBreak>) {
        let ancestry = Ancestry::resolve(nodes, self.max_depth);
        let children = ancestry.sorted_children();

        let forest: Vec<TreeNode> = ancestry
            .sorted_roots()
            .into_iter()
            .map(|root| Self::assemble(&ancestry, &children, root))
            .collect();

        tracing::debug!(
            nodes = ancestry.len(),
            roots = forest.len(),
            "built node forest"
        );

        (forest, ancestry.breaks().to_vec())
    }

    fn assemble(ancestry: &Ancestry<'_>, children: &[Vec<usize>], idx: usize) -> TreeNode {
        let mut tree = TreeNode::new(ancestry.nodes()[idx].clone());
        for child in &children[idx] {
            tree.add_child(Self::assemble(ancestry, children, *child));
        }
        tree
    }
}

/// Build a forest with the default depth bound
pub fn build_forest(nodes: &[Node]) -> Vec<TreeNode> {
    TreeBuilder::default().build(nodes)
}
