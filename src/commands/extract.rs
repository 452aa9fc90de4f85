//! Extract command handler

use std::path::Path;

use anyhow::Result;

use legis::domain::value_objects::NodeId;
use legis::presentation::output::emit_json;

use super::CommandContext;

/// Execute the extract command. Output is always JSON.
pub fn cmd_extract(ctx: &CommandContext, file: &Path, roots: &[String]) -> Result<()> {
    let nodes = ctx.load_nodes(file, None)?;
    let roots: Vec<NodeId> = roots.iter().map(|id| NodeId::from(id.as_str())).collect();

    let extracted = ctx.config.subtree_service().extract(&nodes, &roots);
    tracing::info!(extracted = extracted.len(), "extracted subtrees");

    emit_json(&extracted)?;
    Ok(())
}
