//! Property-based tests for the kind registry.
//!
//! Generates random single-rooted hierarchies (every kind's parent is an
//! earlier registration, so the tree property holds by construction) and
//! verifies the contiguous-range invariant that the whole identifier scheme
//! rests on: a kind's subtree is exactly the id interval
//! `[id, id + descendant_span]`, for descendants and non-descendants alike.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::cast_possible_truncation,
    reason = "Generated hierarchies stay far below u32::MAX kinds"
)]

use proptest::prelude::*;
use vela_ir::{KindRef, KindRegistry, Node, NodeVisitor};

fn noop_dispatch(node: &Node, visitor: &mut dyn NodeVisitor) {
    visitor.visit_node(node);
}

/// Parent picks for kinds 1..=n; kind i's parent is `picks[i-1] % i`,
/// always an earlier registration.
fn hierarchy_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 0..48)
}

fn build(picks: &[u32]) -> (KindRegistry, Vec<KindRef>) {
    let mut registry = KindRegistry::new();
    let mut refs = Vec::with_capacity(picks.len() + 1);
    refs.push(registry.register("root", None, noop_dispatch).unwrap());
    for (i, &pick) in picks.iter().enumerate() {
        let parent = refs[(pick as usize) % (i + 1)];
        // Leaked names keep the registry's &'static str contract; fine in tests.
        let name: &'static str = Box::leak(format!("kind{}", i + 1).into_boxed_str());
        refs.push(registry.register(name, Some(parent), noop_dispatch).unwrap());
    }
    registry.initialize();
    (registry, refs)
}

/// Ancestry by walking parent links, the slow but obviously-correct way.
fn is_ancestor_or_self(registry: &KindRegistry, ancestor: KindRef, kind: KindRef) -> bool {
    let mut cur = Some(kind);
    while let Some(k) = cur {
        if k == ancestor {
            return true;
        }
        cur = registry.descriptor(k).parent();
    }
    false
}

proptest! {
    #[test]
    fn ids_are_a_permutation_of_table_indices(picks in hierarchy_strategy()) {
        let (registry, refs) = build(&picks);
        let mut seen = vec![false; registry.len()];
        for &k in &refs {
            let id = registry.id_of(k);
            prop_assert!(!id.is_unassigned());
            let i = id.raw() as usize;
            prop_assert!(i < registry.len());
            prop_assert!(!seen[i]);
            seen[i] = true;
        }
    }

    #[test]
    fn range_test_agrees_with_parent_links(picks in hierarchy_strategy()) {
        let (registry, refs) = build(&picks);
        for &a in &refs {
            for &b in &refs {
                let expected = is_ancestor_or_self(&registry, a, b);
                prop_assert_eq!(
                    registry.is_a(registry.id_of(b), a),
                    expected,
                    "kind {:?} vs ancestor {:?}",
                    b,
                    a
                );
            }
        }
    }

    #[test]
    fn spans_count_descendants_exactly(picks in hierarchy_strategy()) {
        let (registry, refs) = build(&picks);
        for &k in &refs {
            let descendants = refs
                .iter()
                .filter(|&&d| d != k && is_ancestor_or_self(&registry, k, d))
                .count();
            prop_assert_eq!(
                registry.descriptor(k).descendant_span() as usize,
                descendants
            );
        }
        // Root covers the whole table.
        prop_assert_eq!(
            registry.descriptor(refs[0]).descendant_span() as usize,
            registry.len() - 1
        );
    }

    #[test]
    fn reinitialization_changes_nothing(picks in hierarchy_strategy()) {
        let (mut registry, refs) = build(&picks);
        let before: Vec<_> = refs
            .iter()
            .map(|&k| (registry.id_of(k), registry.descriptor(k).descendant_span()))
            .collect();
        registry.initialize();
        let after: Vec<_> = refs
            .iter()
            .map(|&k| (registry.id_of(k), registry.descriptor(k).descendant_span()))
            .collect();
        prop_assert_eq!(before, after);
    }
}
