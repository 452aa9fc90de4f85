//! Subtree extraction and removal
//!
//! Extraction copies selected nodes plus all their descendants out of a
//! document so they can be re-built as an independent structure elsewhere
//! (a study plan, for instance). Removal prunes one node and its
//! descendants back out of such a copy and reports which ids went away so
//! the caller can reconcile its stored associations.

use std::collections::HashSet;

use crate::domain::entities::{Node, Removal};
use crate::domain::services::ancestry::{Ancestry, DEFAULT_MAX_DEPTH};
use crate::domain::value_objects::NodeId;

/// Extracts and removes subtrees of flat node lists
#[derive(Debug, Clone, Copy)]
pub struct SubtreeService {
    max_depth: usize,
}

impl Default for SubtreeService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl SubtreeService {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Copy every root in `root_ids` and all of its descendants.
    ///
    /// Roots are visited in the given order; each contributes itself and
    /// then its descendants in input order. The union is deduplicated by
    /// id, first discovery winning. Ids absent from `all_nodes` contribute
    /// nothing.
    pub fn extract(&self, all_nodes: &[Node], root_ids: &[NodeId]) -> Vec<Node> {
        if root_ids.is_empty() {
            return Vec::new();
        }

        let ancestry = Ancestry::resolve(all_nodes, self.max_depth);
        let mut seen = HashSet::new();
        let mut extracted = Vec::new();

        for root_id in root_ids {
            let Some(root) = ancestry.index_of(root_id) else {
                tracing::debug!(id = %root_id, "extract root not in node list");
                continue;
            };

            let members = std::iter::once(root)
                .chain((0..ancestry.len()).filter(|idx| ancestry.has_ancestor(*idx, root)));

            for idx in members {
                if seen.insert(idx) {
                    extracted.push(ancestry.nodes()[idx].clone());
                }
            }
        }

        tracing::debug!(
            roots = root_ids.len(),
            nodes = extracted.len(),
            "extracted subtrees"
        );
        extracted
    }

    /// Remove `root_id` and its descendants found within `materialized`.
    ///
    /// Removing an id that is not present leaves `kept` equal to the input
    /// and still reports the id as removed: the caller's intent, that the id
    /// be absent, already holds.
    pub fn remove(&self, materialized: &[Node], root_id: &NodeId) -> Removal {
        let ancestry = Ancestry::resolve(materialized, self.max_depth);

        let mut removed_ids = vec![root_id.clone()];
        if let Some(root) = ancestry.index_of(root_id) {
            removed_ids.extend(
                ancestry
                    .descendants(root)
                    .into_iter()
                    .map(|idx| ancestry.nodes()[idx].id.clone()),
            );
        } else {
            tracing::debug!(id = %root_id, "remove root not in materialized list");
        }

        let removed: HashSet<&NodeId> = removed_ids.iter().collect();
        let kept = materialized
            .iter()
            .filter(|node| !removed.contains(&node.id))
            .cloned()
            .collect();

        Removal { kept, removed_ids }
    }
}

/// Extract with the default depth bound
pub fn extract_subtrees(all_nodes: &[Node], root_ids: &[NodeId]) -> Vec<Node> {
    SubtreeService::default().extract(all_nodes, root_ids)
}

/// Remove with the default depth bound
pub fn remove_subtree(materialized: &[Node], root_id: &NodeId) -> Removal {
    SubtreeService::default().remove(materialized, root_id)
}
