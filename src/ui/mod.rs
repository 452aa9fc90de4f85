//! Terminal rendering for the tree and selection views

pub mod terminal;
pub mod theme;
pub mod tree_view;

pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use tree_view::{render_forest, render_status_bar};
