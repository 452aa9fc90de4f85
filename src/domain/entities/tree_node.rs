//! TreeNode entity - a node plus its ordered children
//!
//! Built fresh by the tree builder on every call; the wrapper owns a copy of
//! the node record so callers keep ownership of their flat list.

use serde::Serialize;

use crate::domain::entities::Node;
use crate::domain::value_objects::{NodeId, NodeKind};

/// A node in a reconstructed forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// The wrapped record
    #[serde(flatten)]
    pub node: Node,
    /// Children, sorted by order key
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Wrap a node with no children
    pub fn new(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn id(&self) -> &NodeId {
        &self.node.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// Whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Ids of every descendant, pre-order, excluding this node
    pub fn descendant_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for child in &self.children {
            child.collect_ids(&mut ids);
        }
        ids
    }

    /// Ids of this node and every descendant, pre-order
    pub fn subtree_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<NodeId>) {
        ids.push(self.node.id.clone());
        for child in &self.children {
            child.collect_ids(ids);
        }
    }

    /// Count of nodes in this subtree, including this node
    pub fn total_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::total_count)
            .sum::<usize>()
    }

    /// Find a node by id in this subtree
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        if &self.node.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Find a node by id anywhere in a forest
pub fn find_in_forest<'a>(forest: &'a [TreeNode], id: &NodeId) -> Option<&'a TreeNode> {
    forest.iter().find_map(|root| root.find(id))
}

/// Count every node in a forest
pub fn forest_count(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::total_count).sum()
}
