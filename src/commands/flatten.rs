//! Flatten command handler

use std::path::Path;

use anyhow::Result;

use legis::domain::services::FlattenMode;
use legis::error::LegisError;
use legis::presentation::output::{emit_json, emit_text};

use super::CommandContext;

/// Execute the flatten command
pub fn cmd_flatten(
    ctx: &CommandContext,
    file: &Path,
    node_id: &str,
    full: bool,
    max_chars: Option<usize>,
) -> Result<()> {
    let nodes = ctx.load_nodes(file, None)?;
    let root = nodes
        .iter()
        .find(|node| node.id.as_str() == node_id)
        .ok_or_else(|| LegisError::NodeNotFound {
            id: node_id.to_string(),
        })?;

    let mut flattener = ctx.config.flattener();
    if let Some(max) = max_chars {
        flattener = flattener.with_display_max_chars(max);
    }
    let mode = if full {
        FlattenMode::Full
    } else {
        FlattenMode::Display
    };

    let flattened = flattener.flatten(root, &nodes, mode);

    if ctx.json {
        emit_json(&flattened)?;
        return Ok(());
    }

    if !flattened.content.is_empty() {
        emit_text(&flattened.content)?;
    }
    if let Some(notice) = flattened.notice() {
        eprintln!("{}", notice);
    }
    Ok(())
}
