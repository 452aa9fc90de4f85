//! Property tests for cascading selection.

use proptest::prelude::*;

use legis::{build_forest, NodeKind, SelectableKinds, Selection, SelectionManager, SelectionState, TreeNode};

use crate::strategy::arb_nodes;

fn preorder(forest: &[TreeNode]) -> Vec<&TreeNode> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode> = forest.iter().rev().collect();
    while let Some(tree) = stack.pop() {
        out.push(tree);
        stack.extend(tree.children.iter().rev());
    }
    out
}

fn everything_selectable() -> SelectionManager {
    SelectionManager::new(SelectableKinds::new(NodeKind::ALL))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Checking a node adds its whole subtree; unchecking it
    /// from there removes all of it again.
    #[test]
    fn property_cascade_closure(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
        preselected in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let forest = build_forest(&nodes);
        let all = preorder(&forest);
        let manager = everything_selectable();
        let node = all[pick.index(all.len())];
        let start: Selection = preselected
            .iter()
            .map(|i| all[i.index(all.len())].id().clone())
            .collect();

        let checked = manager.toggle(&start, node, true);
        for id in node.subtree_ids() {
            prop_assert!(checked.contains(&id));
        }
        prop_assert_eq!(manager.state(&checked, node), SelectionState::Checked);

        let unchecked = manager.toggle(&checked, node, false);
        for id in node.subtree_ids() {
            prop_assert!(!unchecked.contains(&id));
        }
        // nothing outside the subtree is touched
        for id in start.iter() {
            if !node.subtree_ids().contains(id) {
                prop_assert!(unchecked.contains(id));
            }
        }
    }

    /// PROPERTY: Toggling a kind outside the selectable set changes nothing.
    #[test]
    fn property_non_selectable_toggle_is_noop(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let forest = build_forest(&nodes);
        let all = preorder(&forest);
        let node = all[pick.index(all.len())];
        let manager = SelectionManager::new(SelectableKinds::new(
            NodeKind::ALL.into_iter().filter(|kind| *kind != node.kind()),
        ));
        let start: Selection = [all[0].id().clone()].into_iter().collect();

        prop_assert_eq!(manager.toggle(&start, node, checked), start);
    }

    /// PROPERTY: Exactly one derived state holds, and checked means member.
    #[test]
    fn property_states_are_consistent(
        nodes in arb_nodes(),
        toggles in prop::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..8),
    ) {
        let forest = build_forest(&nodes);
        let all = preorder(&forest);
        let manager = SelectionManager::default();

        let mut selection = Selection::new();
        for (pick, checked) in &toggles {
            selection = manager.toggle(&selection, all[pick.index(all.len())], *checked);
        }

        for node in all {
            let state = manager.state(&selection, node);
            prop_assert_eq!(state == SelectionState::Checked, selection.contains(node.id()));
            if manager.is_indeterminate(&selection, node) {
                prop_assert!(!manager.is_fully_checked(&selection, node));
            }
        }
    }
}
