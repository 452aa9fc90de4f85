//! Selection session
//!
//! Holds the one open document and its selection. Opening a different
//! document starts from an empty selection; reopening the same document
//! keeps it. The selection is replaced, never mutated in place, on every
//! toggle.

use anyhow::Result;

use crate::domain::entities::{find_in_forest, Node, Selection, SelectionState, TreeNode};
use crate::domain::ports::NodeRepository;
use crate::domain::services::{selection_roots, SelectionManager, TreeBuilder};
use crate::domain::value_objects::NodeId;

/// Per-document selection state
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    manager: SelectionManager,
    builder: TreeBuilder,
    document_id: Option<String>,
    nodes: Vec<Node>,
    forest: Vec<TreeNode>,
    selection: Selection,
}

impl SelectionSession {
    pub fn new(manager: SelectionManager, builder: TreeBuilder) -> Self {
        Self {
            manager,
            builder,
            ..Self::default()
        }
    }

    /// Open `document_id` with its node list
    pub fn open(&mut self, document_id: impl Into<String>, nodes: Vec<Node>) {
        let document_id = document_id.into();
        if self.document_id.as_deref() != Some(document_id.as_str()) {
            tracing::debug!(document = %document_id, "document changed, clearing selection");
            self.selection = Selection::new();
        }
        self.forest = self.builder.build(&nodes);
        self.nodes = nodes;
        self.document_id = Some(document_id);
    }

    /// Load a document through a repository and open it
    pub fn open_from<R: NodeRepository + ?Sized>(
        &mut self,
        repository: &R,
        document_id: &str,
    ) -> Result<()> {
        let nodes = repository.nodes_for_document(document_id)?;
        self.open(document_id, nodes);
        Ok(())
    }

    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn forest(&self) -> &[TreeNode] {
        &self.forest
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn manager(&self) -> &SelectionManager {
        &self.manager
    }

    /// Replace the selection with one the caller persisted earlier
    pub fn restore(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear(&mut self) {
        self.selection = Selection::new();
    }

    /// Toggle the node with `id`; returns whether the selection changed
    pub fn toggle(&mut self, id: &NodeId, checked: bool) -> bool {
        let Some(node) = find_in_forest(&self.forest, id) else {
            tracing::debug!(%id, "toggle for unknown node ignored");
            return false;
        };
        let next = self.manager.toggle(&self.selection, node, checked);
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    /// Derived checkbox state of the node with `id`
    pub fn state(&self, id: &NodeId) -> Option<SelectionState> {
        find_in_forest(&self.forest, id).map(|node| self.manager.state(&self.selection, node))
    }

    /// Topmost checked nodes, suitable as extraction roots
    pub fn selected_roots(&self) -> Vec<NodeId> {
        selection_roots(&self.selection, &self.forest)
    }
}
