//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod ancestry;
mod flattener;
mod relevance_filter;
mod selection_manager;
mod subtree;
mod tree_builder;

pub use ancestry::{Ancestry, AncestryBreak, BreakReason, DEFAULT_MAX_DEPTH};
pub use flattener::{FlattenMode, Flattener, DEFAULT_DISPLAY_MAX_CHARS, DEFAULT_ELLIPSIS};
pub use relevance_filter::filter_relevant;
pub use selection_manager::{selection_roots, SelectionManager};
pub use subtree::{extract_subtrees, remove_subtree, SubtreeService};
pub use tree_builder::{build_forest, TreeBuilder};
