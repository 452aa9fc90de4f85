//! Node list generators shared by the property tests.

use proptest::prelude::*;

use legis::{Node, NodeKind};

const MAX_NODES: usize = 24;

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop::sample::select(NodeKind::ALL.to_vec())
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-z§ ]{0,12}"
}

/// Arbitrary node lists: parents may dangle, point anywhere (cycles
/// included) and ids may repeat.
pub fn arb_nodes() -> impl Strategy<Value = Vec<Node>> {
    (1..MAX_NODES).prop_flat_map(|len| {
        (
            prop::collection::vec(prop::option::of(0..len + 2), len),
            prop::collection::vec(prop::option::of(-3i64..3), len),
            prop::collection::vec(arb_kind(), len),
            prop::collection::vec(prop::option::weighted(0.15, 0..len), len),
            prop::collection::vec(arb_text(), len),
        )
            .prop_map(|(parents, orders, kinds, dups, texts)| {
                (0..parents.len())
                    .map(|i| {
                        let id = match dups[i] {
                            Some(j) if j < i => format!("n{j}"),
                            _ => format!("n{i}"),
                        };
                        let mut node = Node::new(id, kinds[i], format!("t{i}"))
                            .with_content(texts[i].clone());
                        if let Some(p) = parents[i] {
                            // indices past the end make dangling parents
                            node = node.with_parent(format!("n{p}"));
                        }
                        if let Some(order) = orders[i] {
                            node = node.with_order(order);
                        }
                        node
                    })
                    .collect()
            })
    })
}

/// Well-formed documents: unique ids, every parent defined, no cycles,
/// delivered in shuffled order.
pub fn arb_acyclic_nodes() -> impl Strategy<Value = Vec<Node>> {
    (1..MAX_NODES)
        .prop_flat_map(|len| {
            (
                prop::collection::vec(any::<prop::sample::Index>(), len),
                prop::collection::vec(any::<bool>(), len),
                prop::collection::vec(prop::option::of(-3i64..3), len),
                prop::collection::vec(arb_kind(), len),
                prop::collection::vec(arb_text(), len),
            )
        })
        .prop_map(|(parents, is_root, orders, kinds, texts)| {
            (0..parents.len())
                .map(|i| {
                    let mut node = Node::new(format!("n{i}"), kinds[i], format!("t{i}"))
                        .with_content(texts[i].clone());
                    if i > 0 && !is_root[i] {
                        node = node.with_parent(format!("n{}", parents[i].index(i)));
                    }
                    if let Some(order) = orders[i] {
                        node = node.with_order(order);
                    }
                    node
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}
