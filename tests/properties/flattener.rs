//! Property tests for content flattening.

use proptest::prelude::*;

use legis::{FlattenMode, Flattener};

use crate::strategy::arb_nodes;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Display output is the full output when it fits, otherwise
    /// its first `cap` characters plus the ellipsis.
    #[test]
    fn property_display_is_capped_full(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
        cap in 0usize..64,
    ) {
        let root = &nodes[pick.index(nodes.len())];
        let flattener = Flattener::default().with_display_max_chars(cap);

        let full = flattener.flatten(root, &nodes, FlattenMode::Full);
        let display = flattener.flatten(root, &nodes, FlattenMode::Display);
        let full_len = full.content.chars().count();

        prop_assert!(!full.truncated);
        prop_assert_eq!(full.total_length, full_len);
        prop_assert_eq!(display.total_length, full_len);

        if full_len <= cap {
            prop_assert_eq!(&display, &full);
        } else {
            let expected: String = full.content.chars().take(cap).chain("...".chars()).collect();
            prop_assert!(display.truncated);
            prop_assert_eq!(display.content, expected);
        }
    }

    /// PROPERTY: Output never carries surrounding whitespace or runs of
    /// more than one blank line.
    #[test]
    fn property_full_output_is_tidy(
        nodes in arb_nodes(),
        pick in any::<prop::sample::Index>(),
    ) {
        let root = &nodes[pick.index(nodes.len())];
        let text = Flattener::default().flatten(root, &nodes, FlattenMode::Full).content;

        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert!(!text.contains("\n\n\n"));
    }
}
