//! Relevance filtering
//!
//! Prunes a forest down to what matters for a set of interesting ids:
//! the interesting nodes, their ancestors (as context) and everything
//! beneath them. Sibling order is preserved and no empty placeholders are
//! left behind.

use std::collections::HashSet;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::NodeId;

/// Keep only nodes related to `interesting`
pub fn filter_relevant(forest: &[TreeNode], interesting: &HashSet<NodeId>) -> Vec<TreeNode> {
    if interesting.is_empty() {
        return Vec::new();
    }
    forest
        .iter()
        .filter_map(|tree| prune(tree, interesting))
        .collect()
}

fn prune(tree: &TreeNode, interesting: &HashSet<NodeId>) -> Option<TreeNode> {
    // An interesting node pulls in its whole subtree
    if interesting.contains(tree.id()) {
        return Some(tree.clone());
    }

    let children: Vec<TreeNode> = tree
        .children
        .iter()
        .filter_map(|child| prune(child, interesting))
        .collect();

    if children.is_empty() {
        return None;
    }

    Some(TreeNode {
        node: tree.node.clone(),
        children,
    })
}
