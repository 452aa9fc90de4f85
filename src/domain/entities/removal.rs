//! Removal result - what is left of a transplanted slice after pruning

use serde::{Deserialize, Serialize};

use crate::domain::entities::Node;
use crate::domain::value_objects::NodeId;

/// Outcome of removing a node and its descendants from a materialized list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Removal {
    /// Nodes that stay, in their original order
    pub kept: Vec<Node>,
    /// The removed root followed by its removed descendants
    pub removed_ids: Vec<NodeId>,
}
