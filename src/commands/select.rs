//! Select command handler
//!
//! Replays checks then unchecks on a fresh selection and prints the
//! resulting tri-state tree.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use legis::application::SelectionSession;
use legis::domain::entities::{find_in_forest, forest_count, SelectionState, TreeNode};
use legis::domain::value_objects::NodeId;
use legis::error::LegisError;
use legis::presentation::output::{emit_json, emit_text};
use legis::ui::{render_forest, render_status_bar};

use super::CommandContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectReport {
    selected: Vec<NodeId>,
    roots: Vec<NodeId>,
    states: BTreeMap<NodeId, SelectionState>,
}

/// Execute the select command
pub fn cmd_select(
    ctx: &CommandContext,
    file: &Path,
    document: Option<&str>,
    check: &[String],
    uncheck: &[String],
) -> Result<()> {
    let nodes = ctx.load_nodes(file, document)?;
    let mut session = SelectionSession::new(
        ctx.config.selection_manager(),
        ctx.config.tree_builder(),
    );
    session.open(document.unwrap_or_default(), nodes);

    let toggles = check
        .iter()
        .map(|id| (id, true))
        .chain(uncheck.iter().map(|id| (id, false)));
    for (raw, checked) in toggles {
        let id = NodeId::from(raw.as_str());
        if find_in_forest(session.forest(), &id).is_none() {
            return Err(LegisError::NodeNotFound { id: raw.clone() }.into());
        }
        if !session.toggle(&id, checked) {
            tracing::info!(%id, checked, "toggle left the selection unchanged");
        }
    }

    if ctx.json {
        let mut states = BTreeMap::new();
        collect_states(&session, session.forest(), &mut states);
        emit_json(&SelectReport {
            selected: session.selection().iter().cloned().collect(),
            roots: session.selected_roots(),
            states,
        })?;
        return Ok(());
    }

    let tree = render_forest(
        session.forest(),
        session.selection(),
        session.manager(),
        ctx.unicode,
    );
    let status = render_status_bar(
        session.selection().len(),
        forest_count(session.forest()),
        ctx.unicode,
    );
    emit_text(&format!("{}\n\n{}", tree, status))?;
    Ok(())
}

/// States of the selectable nodes only
fn collect_states(
    session: &SelectionSession,
    forest: &[TreeNode],
    states: &mut BTreeMap<NodeId, SelectionState>,
) {
    for tree in forest {
        if session.manager().is_selectable(tree) {
            states.insert(
                tree.id().clone(),
                session.manager().state(session.selection(), tree),
            );
        }
        collect_states(session, &tree.children, states);
    }
}
