//! Command handlers

mod context;
mod extract;
mod flatten;
mod remove;
mod select;
mod tree;

pub use context::CommandContext;
pub use extract::cmd_extract;
pub use flatten::cmd_flatten;
pub use remove::cmd_remove;
pub use select::cmd_select;
pub use tree::cmd_tree;
