//! Ancestry resolution
//!
//! Turns the declared `parentId` pointers of a flat node list into effective
//! parent links that are guaranteed to form a forest:
//!
//! - duplicate ids keep their first occurrence
//! - a parent id that matches no node makes the node a root
//! - a node whose parent chain leads back to itself becomes a root,
//!   breaking the cycle at the first member met in input order
//! - a node whose chain is deeper than `max_depth` becomes a root
//!
//! Every service that walks descendants works on top of this, so no walk
//! can loop forever on malformed data.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::Node;
use crate::domain::value_objects::NodeId;

/// Default bound on parent-chain length
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Why a declared parent link was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    /// The parent chain led back to the node itself
    Cycle,
    /// The parent chain was longer than the depth bound
    DepthExceeded,
}

impl std::fmt::Display for BreakReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BreakReason::Cycle => write!(f, "parent cycle"),
            BreakReason::DepthExceeded => write!(f, "depth bound exceeded"),
        }
    }
}

/// A node that was promoted to a root against its declared parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryBreak {
    pub id: NodeId,
    pub reason: BreakReason,
}

/// Effective parent links over a deduplicated node list
#[derive(Debug)]
pub struct Ancestry<'a> {
    nodes: Vec<&'a Node>,
    index: HashMap<&'a NodeId, usize>,
    parents: Vec<Option<usize>>,
    breaks: Vec<AncestryBreak>,
    duplicates: usize,
}

impl<'a> Ancestry<'a> {
    /// Resolve effective parents for `nodes`
    pub fn resolve(nodes: &'a [Node], max_depth: usize) -> Self {
        let mut unique = Vec::with_capacity(nodes.len());
        let mut index = HashMap::with_capacity(nodes.len());
        let mut duplicates = 0;

        for node in nodes {
            if index.contains_key(&node.id) {
                duplicates += 1;
                continue;
            }
            index.insert(&node.id, unique.len());
            unique.push(node);
        }

        if duplicates > 0 {
            tracing::warn!(duplicates, "duplicate node ids ignored, first occurrence kept");
        }

        let mut parents: Vec<Option<usize>> = unique
            .iter()
            .map(|node| {
                let parent = node.parent_id.as_ref()?;
                let resolved = index.get(parent).copied();
                if resolved.is_none() {
                    tracing::debug!(id = %node.id, parent = %parent, "dangling parent, treating as root");
                }
                resolved
            })
            .collect();

        let mut breaks = Vec::new();
        for i in 0..unique.len() {
            if let Some(reason) = Self::chain_fault(&parents, i, max_depth) {
                tracing::warn!(id = %unique[i].id, %reason, "ignoring parent link");
                parents[i] = None;
                breaks.push(AncestryBreak {
                    id: unique[i].id.clone(),
                    reason,
                });
            }
        }

        Self {
            nodes: unique,
            index,
            parents,
            breaks,
            duplicates,
        }
    }

    /// Walk the parent chain of `start` and report why it must be cut, if at all.
    ///
    /// A chain that runs into a cycle not containing `start` is left alone:
    /// that cycle is cut when its own first member is processed.
    fn chain_fault(parents: &[Option<usize>], start: usize, max_depth: usize) -> Option<BreakReason> {
        let mut visited = HashSet::new();
        let mut current = parents[start];
        let mut depth = 0;

        while let Some(p) = current {
            if p == start {
                return Some(BreakReason::Cycle);
            }
            // a revisit means a foreign cycle; its laps are not depth
            if !visited.insert(p) {
                return None;
            }
            depth += 1;
            if depth > max_depth {
                return Some(BreakReason::DepthExceeded);
            }
            current = parents[p];
        }
        None
    }

    /// Deduplicated nodes in input order
    pub fn nodes(&self) -> &[&'a Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Effective parent position of the node at `idx`
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// Parent links that were cut
    pub fn breaks(&self) -> &[AncestryBreak] {
        &self.breaks
    }

    /// Number of input records dropped as duplicates
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Children of every node, in input order
    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.nodes.len()];
        for (idx, parent) in self.parents.iter().enumerate() {
            if let Some(p) = parent {
                children[*p].push(idx);
            }
        }
        children
    }

    /// Children of every node, sorted by order key with input order as tiebreak
    pub fn sorted_children(&self) -> Vec<Vec<usize>> {
        let mut children = self.children();
        for siblings in &mut children {
            self.sort_by_order(siblings);
        }
        children
    }

    /// Root positions sorted by order key with input order as tiebreak
    pub fn sorted_roots(&self) -> Vec<usize> {
        let mut roots: Vec<usize> = (0..self.nodes.len())
            .filter(|idx| self.parents[*idx].is_none())
            .collect();
        self.sort_by_order(&mut roots);
        roots
    }

    /// Stable sort of positions by order key
    pub fn sort_by_order(&self, positions: &mut [usize]) {
        positions.sort_by_key(|idx| self.nodes[*idx].order());
    }

    /// Whether `ancestor` appears on the effective parent chain of `idx`
    pub fn has_ancestor(&self, idx: usize, ancestor: usize) -> bool {
        let mut current = self.parents[idx];
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parents[p];
        }
        false
    }

    /// Descendants of `idx`, depth-first pre-order, children in input order
    pub fn descendants(&self, idx: usize) -> Vec<usize> {
        let children = self.children();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = children[idx].iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(children[current].iter().rev());
        }
        out
    }
}
