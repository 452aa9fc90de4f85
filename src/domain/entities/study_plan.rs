//! StudyPlan entity - a contest's curated slice of a law
//!
//! The plan holds value copies of node records taken from the source
//! document. Ids are not rewritten; the plan is the new owner context.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Node;
use crate::domain::value_objects::NodeId;

/// Nodes attached to one contest for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub contest_id: String,
    pub document_id: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl StudyPlan {
    /// Create an empty plan
    pub fn new(contest_id: impl Into<String>, document_id: impl Into<String>) -> Self {
        Self {
            contest_id: contest_id.into(),
            document_id: document_id.into(),
            nodes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Ids of the attached nodes, in plan order
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Append nodes not already attached; returns how many were added
    pub fn merge(&mut self, nodes: Vec<Node>) -> usize {
        let mut seen: HashSet<NodeId> = self.nodes.iter().map(|n| n.id.clone()).collect();
        let before = self.nodes.len();
        for node in nodes {
            if seen.insert(node.id.clone()) {
                self.nodes.push(node);
            }
        }
        self.nodes.len() - before
    }
}
