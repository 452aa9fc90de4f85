//! Selection entity - the set of checked node ids for one open document
//!
//! A selection is a plain value: operations return a new selection and the
//! caller replaces the one it holds.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NodeId;

/// Checkbox state derived from a selection and a subtree shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    /// The node itself is in the selection
    Checked,
    /// Nothing relevant below the node is selected
    Unchecked,
    /// Some, but not all, selectable descendants are selected
    Indeterminate,
}

/// Set of checked node ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<NodeId>,
}

impl Selection {
    /// An empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Checked ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.ids.iter()
    }

    /// A copy of this selection with `ids` added
    pub fn with<'a>(&self, ids: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let mut next = self.clone();
        next.ids.extend(ids.into_iter().cloned());
        next
    }

    /// A copy of this selection with `ids` removed
    pub fn without<'a>(&self, ids: impl IntoIterator<Item = &'a NodeId>) -> Self {
        let mut next = self.clone();
        for id in ids {
            next.ids.remove(id);
        }
        next
    }
}

impl FromIterator<NodeId> for Selection {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
