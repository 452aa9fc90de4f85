//! Legis - hierarchical selection and content aggregation for legal texts
//!
//! Legis turns a flat list of structural nodes (books, titles, chapters,
//! articles, paragraphs...) into a forest, lets a user check whole subtrees
//! with tri-state feedback, copies and prunes subtrees, and flattens a
//! subtree's text for display or for a text generator.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{SelectionSession, StudyPlanService};
pub use config::Config;
pub use domain::entities::{
    Flattened, Node, Removal, Selection, SelectionState, StudyPlan, TreeNode,
};
pub use domain::services::{
    build_forest, extract_subtrees, filter_relevant, remove_subtree, FlattenMode, Flattener,
    SelectionManager, SubtreeService, TreeBuilder,
};
pub use domain::value_objects::{NodeId, NodeKind, OrderKey, SelectableKinds};
pub use error::{LegisError, LegisResult};
pub use infrastructure::FileNodeRepository;
