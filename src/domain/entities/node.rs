//! Node entity - one flat record of a legal document
//!
//! Nodes arrive from the persistence layer as a flat, unordered list where
//! each record points at its parent. The engine never mutates them.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{NodeId, NodeKind, OrderKey};

/// A flat node record (book, article, paragraph, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,

    /// Document (law) this node belongs to
    #[serde(default, deserialize_with = "null_as_empty")]
    pub document_id: String,

    /// Structural kind
    pub kind: NodeKind,

    /// Display label such as "293" or "1º"
    #[serde(default, deserialize_with = "null_as_empty")]
    pub number: String,

    /// Canonical identifier for numbered kinds, heading otherwise
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Body text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Parent reference; absent for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<NodeId>,

    /// Sibling ordering key; absent sorts as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_key: Option<OrderKey>,
}

/// Text fields arrive as `null` from database-backed sources
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Node {
    /// Create a root node with empty number and content
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            document_id: String::new(),
            kind,
            number: String::new(),
            title: title.into(),
            content: String::new(),
            parent_id: None,
            order_key: None,
        }
    }

    /// Set the parent reference
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Set the body text
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the sibling ordering key
    pub fn with_order(mut self, order_key: impl Into<OrderKey>) -> Self {
        self.order_key = Some(order_key.into());
        self
    }

    /// Set the display number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Set the owning document
    pub fn with_document(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = document_id.into();
        self
    }

    /// Effective ordering key
    pub fn order(&self) -> OrderKey {
        self.order_key.unwrap_or_default()
    }

    /// Short one-line label: kind, number, title
    pub fn label(&self) -> String {
        let mut parts = vec![self.kind.as_str()];
        if !self.number.is_empty() {
            parts.push(&self.number);
        }
        if !self.title.is_empty() {
            parts.push(&self.title);
        }
        parts.join(" ")
    }
}
