//! Tree rendering with derived checkbox states.
//!
//! Only selectable nodes get a checkbox; everything else is printed as
//! context. States come from the selection manager on every render.

use crate::domain::entities::{Selection, SelectionState, TreeNode};
use crate::domain::services::SelectionManager;

use super::theme::Glyphs;

/// Render a whole forest, one node per line
pub fn render_forest(
    forest: &[TreeNode],
    selection: &Selection,
    manager: &SelectionManager,
    supports_unicode: bool,
) -> String {
    let glyphs = Glyphs::new(supports_unicode);
    let mut lines = Vec::new();
    for tree in forest {
        lines.push(render_line(tree, selection, manager, &glyphs, ""));
        render_children(tree, selection, manager, &glyphs, "", &mut lines);
    }
    lines.join("\n")
}

fn render_children(
    tree: &TreeNode,
    selection: &Selection,
    manager: &SelectionManager,
    glyphs: &Glyphs,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let count = tree.children.len();
    for (i, child) in tree.children.iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { glyphs.last_branch } else { glyphs.branch };
        lines.push(render_line(
            child,
            selection,
            manager,
            glyphs,
            &format!("{}{}", prefix, branch),
        ));

        let nested = if last { "   " } else { glyphs.pipe };
        render_children(
            child,
            selection,
            manager,
            glyphs,
            &format!("{}{}", prefix, nested),
            lines,
        );
    }
}

fn render_line(
    tree: &TreeNode,
    selection: &Selection,
    manager: &SelectionManager,
    glyphs: &Glyphs,
    prefix: &str,
) -> String {
    let label = if tree.node.title.trim().is_empty() {
        tree.node.label()
    } else {
        tree.node.title.trim().to_string()
    };

    if !manager.is_selectable(tree) {
        return format!("{}{} ({})", prefix, label, tree.id());
    }

    let icon = match manager.state(selection, tree) {
        SelectionState::Checked => glyphs.selected,
        SelectionState::Unchecked => glyphs.unselected,
        SelectionState::Indeterminate => glyphs.partial,
    };
    format!("{}{} {} ({})", prefix, icon, label, tree.id())
}

/// Render the status bar showing selection counts
pub fn render_status_bar(selected: usize, total: usize, supports_unicode: bool) -> String {
    let glyphs = Glyphs::new(supports_unicode);
    format!(
        "Selected: {}/{} nodes\n\n{} = selected    {} = partial    {} = not selected",
        selected, total, glyphs.selected, glyphs.partial, glyphs.unselected
    )
}
