//! Property tests for forest construction.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use legis::{build_forest, Node, NodeId, TreeNode};

use crate::strategy::arb_nodes;

fn collect_ids(forest: &[TreeNode], out: &mut Vec<NodeId>) {
    for tree in forest {
        out.push(tree.id().clone());
        collect_ids(&tree.children, out);
    }
}

fn first_index(nodes: &[Node]) -> HashMap<NodeId, usize> {
    let mut index = HashMap::new();
    for (i, node) in nodes.iter().enumerate() {
        index.entry(node.id.clone()).or_insert(i);
    }
    index
}

fn assert_sorted(siblings: &[TreeNode], index: &HashMap<NodeId, usize>) -> Result<(), TestCaseError> {
    for pair in siblings.windows(2) {
        let a = (pair[0].node.order(), index[pair[0].id()]);
        let b = (pair[1].node.order(), index[pair[1].id()]);
        prop_assert!(a < b, "siblings out of order: {:?} before {:?}", a, b);
    }
    for tree in siblings {
        assert_sorted(&tree.children, index)?;
    }
    Ok(())
}

fn assert_parent_links(forest: &[TreeNode]) -> Result<(), TestCaseError> {
    for tree in forest {
        for child in &tree.children {
            prop_assert_eq!(child.node.parent_id.as_ref(), Some(tree.id()));
        }
        assert_parent_links(&tree.children)?;
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every unique input id appears exactly once in the forest.
    #[test]
    fn property_forest_holds_each_unique_id_once(nodes in arb_nodes()) {
        let forest = build_forest(&nodes);

        let mut ids = Vec::new();
        collect_ids(&forest, &mut ids);
        let unique: HashSet<NodeId> = nodes.iter().map(|n| n.id.clone()).collect();

        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(ids.into_iter().collect::<HashSet<_>>(), unique);
    }

    /// PROPERTY: Siblings (roots included) are sorted by order key, ties by
    /// first appearance in the input.
    #[test]
    fn property_siblings_sorted_stably(nodes in arb_nodes()) {
        let forest = build_forest(&nodes);
        assert_sorted(&forest, &first_index(&nodes))?;
    }

    /// PROPERTY: A child always sits under the parent it names.
    #[test]
    fn property_children_sit_under_declared_parent(nodes in arb_nodes()) {
        assert_parent_links(&build_forest(&nodes))?;
    }

    /// PROPERTY: Building never changes the caller's records.
    #[test]
    fn property_build_leaves_input_untouched(nodes in arb_nodes()) {
        let before = nodes.clone();
        let _ = build_forest(&nodes);
        prop_assert_eq!(nodes, before);
    }
}
