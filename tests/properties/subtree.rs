//! Property tests for subtree extraction and removal.

use std::collections::HashSet;

use proptest::prelude::*;

use legis::{build_forest, extract_subtrees, remove_subtree, Node, NodeId};

use crate::strategy::{arb_acyclic_nodes, arb_nodes};

fn ids(nodes: &[Node]) -> Vec<NodeId> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Removing one root from a multi-root extraction removes
    /// exactly what extracting that root alone would produce.
    #[test]
    fn property_extract_remove_inverse(
        nodes in arb_acyclic_nodes(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
        which in any::<prop::sample::Index>(),
    ) {
        let roots: Vec<NodeId> = picks
            .iter()
            .map(|i| nodes[i.index(nodes.len())].id.clone())
            .collect();
        let r = roots[which.index(roots.len())].clone();

        let copy = extract_subtrees(&nodes, &roots);
        let removal = remove_subtree(&copy, &r);
        let alone: HashSet<NodeId> = ids(&extract_subtrees(&nodes, std::slice::from_ref(&r)))
            .into_iter()
            .collect();

        let removed: HashSet<NodeId> = removal.removed_ids.iter().cloned().collect();
        prop_assert_eq!(&removed, &alone);

        let expected_kept: Vec<Node> = copy
            .iter()
            .filter(|n| !alone.contains(&n.id))
            .cloned()
            .collect();
        prop_assert_eq!(removal.kept, expected_kept);
    }

    /// PROPERTY: Extraction never repeats an id and the copy rebuilds into
    /// a forest whose roots are the requested roots.
    #[test]
    fn property_extraction_is_self_contained(
        nodes in arb_acyclic_nodes(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let roots: Vec<NodeId> = picks
            .iter()
            .map(|i| nodes[i.index(nodes.len())].id.clone())
            .collect();
        let copy = extract_subtrees(&nodes, &roots);

        let unique: HashSet<NodeId> = ids(&copy).into_iter().collect();
        prop_assert_eq!(unique.len(), copy.len());

        let requested: HashSet<&NodeId> = roots.iter().collect();
        for tree in build_forest(&copy) {
            prop_assert!(requested.contains(tree.id()));
        }
    }

    /// PROPERTY: Extraction and removal terminate on any input, cycles
    /// included, and removal always reports its root first.
    #[test]
    fn property_messy_input_never_panics(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
    ) {
        let root = nodes[pick.index(nodes.len())].id.clone();
        let copy = extract_subtrees(&nodes, std::slice::from_ref(&root));
        let removal = remove_subtree(&copy, &root);

        prop_assert_eq!(removal.removed_ids.first(), Some(&root));
        prop_assert!(removal.kept.iter().all(|n| n.id != root));
    }
}
