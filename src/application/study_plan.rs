//! Study plan use case
//!
//! Copies selected slices of a law into a contest's study plan and prunes
//! them back out. Removal returns the ids that left the plan so the caller
//! can drop whatever association records point at them.

use crate::application::session::SelectionSession;
use crate::domain::entities::{Node, StudyPlan, TreeNode};
use crate::domain::services::{SubtreeService, TreeBuilder};
use crate::domain::value_objects::NodeId;

/// Attaches and detaches subtrees of a document to study plans
#[derive(Debug, Clone, Copy, Default)]
pub struct StudyPlanService {
    subtrees: SubtreeService,
    builder: TreeBuilder,
}

impl StudyPlanService {
    pub fn new(subtrees: SubtreeService, builder: TreeBuilder) -> Self {
        Self { subtrees, builder }
    }

    /// Copy `roots` and their descendants from `all_nodes` into the plan.
    ///
    /// Returns the number of nodes newly attached.
    pub fn attach(&self, plan: &mut StudyPlan, all_nodes: &[Node], roots: &[NodeId]) -> usize {
        let extracted = self.subtrees.extract(all_nodes, roots);
        let added = plan.merge(extracted);
        tracing::info!(
            contest = %plan.contest_id,
            roots = roots.len(),
            added,
            "attached nodes to study plan"
        );
        added
    }

    /// Attach whatever is currently checked in `session`
    pub fn attach_selection(&self, plan: &mut StudyPlan, session: &SelectionSession) -> usize {
        let roots = session.selected_roots();
        self.attach(plan, session.nodes(), &roots)
    }

    /// Remove `node_id` and its descendants from the plan.
    ///
    /// Returns the removed ids; an id that was not attached is still
    /// reported.
    pub fn detach(&self, plan: &mut StudyPlan, node_id: &NodeId) -> Vec<NodeId> {
        let removal = self.subtrees.remove(&plan.nodes, node_id);
        plan.nodes = removal.kept;
        tracing::info!(
            contest = %plan.contest_id,
            removed = removal.removed_ids.len(),
            "detached nodes from study plan"
        );
        removal.removed_ids
    }

    /// Render the plan as its own forest
    pub fn forest(&self, plan: &StudyPlan) -> Vec<TreeNode> {
        self.builder.build(&plan.nodes)
    }
}
