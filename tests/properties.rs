//! Property tests for the red-black tree.
//!
//! Each property drives a tree with an arbitrary operation script and
//! compares it against a sorted `Vec` model.

use proptest::prelude::*;

use redblack::{RedBlackTree, TreeStats};

/// Number of operations per generated script
const MAX_OPS: usize = 200;

#[derive(Debug, Clone)]
enum Step {
    Insert(i64),
    /// Delete the n-th live key (modulo the live count)
    DeleteNth(usize),
    /// Delete by key, whether present or not
    DeleteKey(i64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (-64i64..64).prop_map(Step::Insert),
        2 => any::<usize>().prop_map(Step::DeleteNth),
        1 => (-64i64..64).prop_map(Step::DeleteKey),
    ]
}

/// Apply a script, checking invariants and size after every step.
fn apply(steps: &[Step]) -> Result<(RedBlackTree, Vec<i64>), TestCaseError> {
    let mut tree = RedBlackTree::from_keys(&[]);
    let mut model: Vec<i64> = Vec::new();

    for step in steps {
        match *step {
            Step::Insert(key) => {
                let before = tree.len();
                let handle = tree.insert_key(key);
                prop_assert_eq!(tree.len(), before + 1);
                prop_assert_eq!(tree.key_of(handle), Some(key));
                let at = model.partition_point(|&k| k <= key);
                model.insert(at, key);
            }
            Step::DeleteNth(n) => {
                if model.is_empty() {
                    continue;
                }
                let key = model.remove(n % model.len());
                let handle = tree.search(key).expect("model key present in tree");
                let before = tree.len();
                let (removed, label) = tree.delete(handle).expect("handle from search");
                prop_assert_eq!(removed, key);
                prop_assert_eq!(label, key.to_string());
                prop_assert_eq!(tree.len(), before - 1);
            }
            Step::DeleteKey(key) => {
                let removed = tree.remove_key(key);
                match model.iter().position(|&k| k == key) {
                    Some(at) => {
                        prop_assert_eq!(removed.map(|(k, _)| k), Some(key));
                        model.remove(at);
                    }
                    None => prop_assert!(removed.is_none()),
                }
            }
        }

        let stats = tree.validate();
        prop_assert!(stats.is_ok(), "invariant violated: {:?}", stats);
    }

    Ok((tree, model))
}

fn height_bound(stats: &TreeStats) -> usize {
    (2.0 * ((stats.len + 1) as f64).log2()).floor() as usize
}

proptest! {
    /// All four red-black invariants hold after every step.
    #[test]
    fn prop_invariants_preserved(steps in prop::collection::vec(step(), 0..MAX_OPS)) {
        let (tree, _) = apply(&steps)?;
        let stats = tree.validate().unwrap();
        prop_assert!(stats.height <= height_bound(&stats));
    }

    /// In-order traversal matches the sorted model.
    #[test]
    fn prop_order_fidelity(steps in prop::collection::vec(step(), 0..MAX_OPS)) {
        let (tree, model) = apply(&steps)?;
        prop_assert_eq!(tree.keys().collect::<Vec<_>>(), model);
    }

    /// Live keys are found; absent keys are not.
    #[test]
    fn prop_lookup_correctness(steps in prop::collection::vec(step(), 0..MAX_OPS)) {
        let (tree, model) = apply(&steps)?;
        for key in -64i64..64 {
            let found = tree.search(key);
            prop_assert_eq!(found.is_some(), model.contains(&key));
            if let Some(handle) = found {
                prop_assert_eq!(tree.key_of(handle), Some(key));
            }
        }
    }

    /// Deleting every inserted key, in any order, empties the tree.
    #[test]
    fn prop_round_trip(
        keys in prop::collection::vec(-1_000i64..1_000, 0..150),
        order in any::<u64>(),
    ) {
        let mut tree = RedBlackTree::from_keys(&keys);
        prop_assert_eq!(tree.len(), keys.len());

        // Deterministic permutation driven by `order`
        let mut pending = keys.clone();
        let mut state = order;
        while !pending.is_empty() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let key = pending.swap_remove((state >> 33) as usize % pending.len());
            prop_assert!(tree.remove_key(key).is_some());
        }

        prop_assert!(tree.is_empty());
        prop_assert!(tree.root().is_none());
    }

    /// The export has one slot per node plus one NIL per absent child.
    #[test]
    fn prop_export_shape(keys in prop::collection::vec(any::<i64>(), 0..100)) {
        let tree = RedBlackTree::from_keys(&keys);
        let slots: Vec<_> = tree.export().collect();
        let nodes = slots.iter().filter(|slot| !slot.is_nil()).count();

        prop_assert_eq!(nodes, keys.len());
        if keys.is_empty() {
            prop_assert!(slots.is_empty());
        } else {
            prop_assert_eq!(slots.len() - nodes, keys.len() + 1);
        }
        // Breadth-first: depth never decreases
        prop_assert!(slots.windows(2).all(|w| w[0].depth() <= w[1].depth()));
    }
}
