//! Cascading tri-state selection
//!
//! Toggling a selectable node adds or removes the node and every descendant.
//! The latest cascade always wins: re-checking a node re-adds its whole
//! subtree even if parts were unchecked since, and unchecking removes the
//! whole subtree even if parts were never checked.
//!
//! Checkbox state is never stored. It is derived from the selection and the
//! subtree shape on every query.

use crate::domain::entities::{Selection, SelectionState, TreeNode};
use crate::domain::value_objects::{NodeId, SelectableKinds};

/// Applies cascades and derives checkbox states
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selectable: SelectableKinds,
}

impl SelectionManager {
    pub fn new(selectable: SelectableKinds) -> Self {
        Self { selectable }
    }

    pub fn selectable_kinds(&self) -> &SelectableKinds {
        &self.selectable
    }

    /// Whether `node` may be toggled directly
    pub fn is_selectable(&self, node: &TreeNode) -> bool {
        self.selectable.contains(node.kind())
    }

    /// Check or uncheck `node` and its whole subtree.
    ///
    /// Returns the selection unchanged when `node` is not selectable.
    pub fn toggle(&self, selection: &Selection, node: &TreeNode, checked: bool) -> Selection {
        if !self.is_selectable(node) {
            tracing::debug!(id = %node.id(), kind = %node.kind(), "toggle ignored for non-selectable node");
            return selection.clone();
        }

        let subtree = node.subtree_ids();
        if checked {
            selection.with(&subtree)
        } else {
            selection.without(&subtree)
        }
    }

    pub fn is_checked(&self, selection: &Selection, node: &TreeNode) -> bool {
        selection.contains(node.id())
    }

    /// True when the node has children and every child is either a checked
    /// selectable node or a fully checked non-selectable node.
    pub fn is_fully_checked(&self, selection: &Selection, node: &TreeNode) -> bool {
        !node.children.is_empty()
            && node.children.iter().all(|child| {
                if self.is_selectable(child) {
                    selection.contains(child.id())
                } else {
                    self.is_fully_checked(selection, child)
                }
            })
    }

    /// True when the node is unchecked, some selectable descendant is
    /// checked, and not all of them are.
    pub fn is_indeterminate(&self, selection: &Selection, node: &TreeNode) -> bool {
        !self.is_checked(selection, node)
            && self.has_checked_selectable_descendant(selection, node)
            && !self.is_fully_checked(selection, node)
    }

    /// Search down through non-selectable nodes; stop at the first
    /// selectable layer.
    fn has_checked_selectable_descendant(&self, selection: &Selection, node: &TreeNode) -> bool {
        node.children.iter().any(|child| {
            if self.is_selectable(child) {
                selection.contains(child.id())
            } else {
                self.has_checked_selectable_descendant(selection, child)
            }
        })
    }

    /// Derived checkbox state of `node`
    pub fn state(&self, selection: &Selection, node: &TreeNode) -> SelectionState {
        if self.is_checked(selection, node) {
            SelectionState::Checked
        } else if self.is_indeterminate(selection, node) {
            SelectionState::Indeterminate
        } else {
            SelectionState::Unchecked
        }
    }
}

/// Topmost checked nodes of a forest, in tree order.
///
/// A checked node whose parent is also checked is covered by the parent's
/// subtree and is not listed.
pub fn selection_roots(selection: &Selection, forest: &[TreeNode]) -> Vec<NodeId> {
    fn walk(selection: &Selection, tree: &TreeNode, roots: &mut Vec<NodeId>) {
        if selection.contains(tree.id()) {
            roots.push(tree.id().clone());
            return;
        }
        for child in &tree.children {
            walk(selection, child, roots);
        }
    }

    let mut roots = Vec::new();
    for tree in forest {
        walk(selection, tree, &mut roots);
    }
    roots
}
