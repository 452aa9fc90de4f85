//! NodeRepository port - abstraction for loading document nodes
//!
//! The persistence layer stores nodes as flat records and makes no
//! ordering promise; the domain sorts explicitly.

use crate::domain::entities::Node;
use anyhow::Result;

/// Abstract source of node records
pub trait NodeRepository {
    /// Load every node of one document, in no particular order
    fn nodes_for_document(&self, document_id: &str) -> Result<Vec<Node>>;
}
