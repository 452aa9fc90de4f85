//! Remove command handler

use std::path::Path;

use anyhow::Result;

use legis::domain::value_objects::NodeId;
use legis::presentation::output::emit_json;

use super::CommandContext;

/// Execute the remove command. Output is always JSON.
pub fn cmd_remove(ctx: &CommandContext, file: &Path, root: &str) -> Result<()> {
    let nodes = ctx.load_nodes(file, None)?;

    let removal = ctx
        .config
        .subtree_service()
        .remove(&nodes, &NodeId::from(root));
    tracing::info!(
        removed = removal.removed_ids.len(),
        kept = removal.kept.len(),
        "removed subtree"
    );

    emit_json(&removal)?;
    Ok(())
}
