//! Tree command handler

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use legis::domain::entities::{forest_count, Selection};
use legis::domain::services::filter_relevant;
use legis::domain::value_objects::NodeId;
use legis::presentation::output::{emit_json, emit_text};
use legis::ui::render_forest;

use super::CommandContext;

/// Execute the tree command
pub fn cmd_tree(
    ctx: &CommandContext,
    file: &Path,
    document: Option<&str>,
    focus: &[String],
) -> Result<()> {
    let nodes = ctx.load_nodes(file, document)?;
    let mut forest = ctx.config.tree_builder().build(&nodes);

    if !focus.is_empty() {
        let interesting: HashSet<NodeId> =
            focus.iter().map(|id| NodeId::from(id.as_str())).collect();
        forest = filter_relevant(&forest, &interesting);
        tracing::info!(kept = forest_count(&forest), "filtered forest");
    }

    if ctx.json {
        emit_json(&forest)?;
    } else if !forest.is_empty() {
        let manager = ctx.config.selection_manager();
        emit_text(&render_forest(&forest, &Selection::new(), &manager, ctx.unicode))?;
    }
    Ok(())
}
