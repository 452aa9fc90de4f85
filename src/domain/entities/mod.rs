//! Domain Entities
//!
//! - `Node` - A flat record from the persistence layer
//! - `TreeNode` - A node with its ordered children
//! - `Selection` - Checked ids of one open document
//! - `Flattened` / `Removal` - Results handed back to callers
//! - `StudyPlan` - A contest's curated slice of a law

mod flattened;
mod node;
mod removal;
mod selection;
mod study_plan;
mod tree_node;

pub use flattened::Flattened;
pub use node::Node;
pub use removal::Removal;
pub use selection::{Selection, SelectionState};
pub use study_plan::StudyPlan;
pub use tree_node::{find_in_forest, forest_count, TreeNode};
