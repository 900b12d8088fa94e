// =====================================================================
// File: tree/tests.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   Unit tests for the red-black tree (`Node` and `RBTree`). Covers
//   insert fix-up cases, rotations, search, rendering and the
//   invariant checker, plus property tests over random insert orders.
//
// Notes:
//   * Only compiled when running `cargo test`.
//   * Different insert orders of the same keys can give different (but
//     valid) shapes, so the property tests only check invariants.
// =====================================================================


// =================================================================
// Helpers shared by the test modules below
// =================================================================
#[cfg(test)]
fn key_of(tree: &crate::RBTree, id: Option<crate::tree::NodeId>) -> Option<i64> {
    id.map(|id| tree.node(id).key())
}


// =================================================================
// Unit tests cover the node store and an empty tree
// =================================================================
#[cfg(test)]
mod node_tests {
    use crate::tree::{Color, Node};
    use crate::RBTree;

    #[test]
    fn test_new_node_is_detached() {
        let node = Node::new(7, Color::Red);
        assert_eq!(node.key(), 7);
        assert!(node.is_red());
        assert!(node.is_leaf());
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_color_markers() {
        assert_eq!(Color::Red.marker(), 'R');
        assert_eq!(Color::Black.marker(), 'B');
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = RBTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_none());
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_first_insert_is_black_root() {
        let mut tree = RBTree::new();
        let id = tree.insert(42);
        assert_eq!(tree.root(), Some(id));
        assert!(tree.node(id).is_black());
        assert!(tree.node(id).parent().is_none());
    }
}


// =================================================================
// Unit tests cover the insertion fix-up cases
// =================================================================
#[cfg(test)]
mod insertion_tests {
    use super::key_of;
    use crate::RBTree;

    #[test]
    // Right-right line: single left rotation at the parent
    fn insert_ascending_three_rotates_left() {
        let tree: RBTree = [10, 20, 30].into_iter().collect();
        let root = tree.root().unwrap();

        assert_eq!(tree.node(root).key(), 20);
        assert!(tree.node(root).is_black());
        assert_eq!(key_of(&tree, tree.node(root).left()), Some(10));
        assert_eq!(key_of(&tree, tree.node(root).right()), Some(30));

        // Old grandparent is recolored red, the promoted parent black
        let left = tree.node(root).left().unwrap();
        let right = tree.node(root).right().unwrap();
        assert!(tree.node(left).is_red());
        assert!(tree.node(right).is_red());
        assert!(tree.validate().is_ok());
    }

    #[test]
    // Left-left line: single right rotation at the parent
    fn insert_descending_three_rotates_right() {
        let tree: RBTree = [10, 5, 1].into_iter().collect();
        let root = tree.root().unwrap();

        assert_eq!(tree.node(root).key(), 5);
        assert!(tree.node(root).is_black());
        assert_eq!(key_of(&tree, tree.node(root).left()), Some(1));
        assert_eq!(key_of(&tree, tree.node(root).right()), Some(10));
        assert!(tree.validate().is_ok());
    }

    #[test]
    // Triangle: straighten with a left rotation, then rotate right
    fn insert_triangle_double_rotation() {
        let tree: RBTree = [10, 1, 5].into_iter().collect();
        let root = tree.root().unwrap();

        assert_eq!(tree.node(root).key(), 5);
        assert!(tree.node(root).is_black());
        assert_eq!(key_of(&tree, tree.node(root).left()), Some(1));
        assert_eq!(key_of(&tree, tree.node(root).right()), Some(10));
        assert!(tree.validate().is_ok());
    }

    #[test]
    // Mirror triangle: straighten with a right rotation, then rotate left
    fn insert_mirror_triangle_double_rotation() {
        let tree: RBTree = [1, 10, 5].into_iter().collect();
        let root = tree.root().unwrap();

        assert_eq!(tree.node(root).key(), 5);
        assert_eq!(key_of(&tree, tree.node(root).left()), Some(1));
        assert_eq!(key_of(&tree, tree.node(root).right()), Some(10));
        assert!(tree.validate().is_ok());
    }

    #[test]
    // Red uncle: recolor only, root stays put and is forced black
    fn insert_with_red_uncle_recolors() {
        let mut tree: RBTree = [10, 5, 15].into_iter().collect();
        tree.insert(1);
        let root = tree.root().unwrap();

        assert_eq!(tree.node(root).key(), 10);
        assert!(tree.node(root).is_black());

        let five = tree.search(5).unwrap();
        let fifteen = tree.search(15).unwrap();
        let one = tree.search(1).unwrap();
        assert!(tree.node(five).is_black());
        assert!(tree.node(fifteen).is_black());
        assert!(tree.node(one).is_red());
        assert_eq!(tree.black_height(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    // Recoloring that propagates up the tree and ends with a rotation near the root
    fn insert_ascending_run_stays_balanced() {
        let mut tree = RBTree::new();
        for key in 1..=10 {
            tree.insert(key);
            assert!(tree.validate().is_ok(), "invalid after inserting {}", key);
        }

        assert_eq!(tree.len(), 10);
        assert_eq!(tree.keys(), (1..=10).collect::<Vec<_>>());
        assert!(tree.height() <= 2 * 4); // 2 * log2(11) rounded up
    }

    #[test]
    fn height_stays_logarithmic_for_sorted_input() {
        let tree: RBTree = (0..1023).collect();
        assert_eq!(tree.len(), 1023);
        assert!(tree.height() <= 20);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn insert_duplicates_do_not_error() {
        let mut tree = RBTree::new();
        let first = tree.insert(10);
        let second = tree.insert(10);

        assert_ne!(first, second);
        assert_eq!(tree.len(), 2);
        // Second copy hangs to the right of the first
        assert_eq!(tree.node(first).right(), Some(second));
        assert!(tree.contains(10));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn insert_many_duplicates_keeps_invariants() {
        let mut tree = RBTree::new();
        for _ in 0..50 {
            tree.insert(5);
        }
        tree.extend([4, 6, 5]);

        assert_eq!(tree.len(), 53);
        assert!(tree.validate().is_ok());
        assert!(tree.contains(4) && tree.contains(5) && tree.contains(6));
        assert_eq!(tree.keys().iter().filter(|&&k| k == 5).count(), 51);
    }

    #[test]
    fn insert_extreme_keys() {
        let tree: RBTree = [i64::MAX, i64::MIN, 0, -1].into_iter().collect();
        assert_eq!(tree.keys(), vec![i64::MIN, -1, 0, i64::MAX]);
        assert!(tree.validate().is_ok());
    }
}


// =================================================================
// Unit tests cover search, render and teardown
// =================================================================
#[cfg(test)]
mod query_tests {
    use crate::RBTree;

    #[test]
    fn search_present_and_absent() {
        let tree: RBTree = [10, 5, 15, 3, 7, 12, 18, 1].into_iter().collect();

        let found = tree.search(7).expect("7 was inserted");
        assert_eq!(tree.node(found).key(), 7);
        assert!(tree.search(99).is_none());
        assert!(!tree.contains(0));
        assert!(!tree.contains(-3));
    }

    #[test]
    fn search_empty_tree() {
        let tree = RBTree::new();
        assert!(tree.search(1).is_none());
    }

    #[test]
    fn render_empty_tree() {
        assert_eq!(RBTree::new().render(), "The tree is empty.\n");
    }

    #[test]
    fn render_right_subtree_first() {
        let tree: RBTree = [10, 5, 15, 1].into_iter().collect();
        let expected = "\tB:15\nB:10\n\tB:5\n\t\tR:1\n";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn render_does_not_change_tree() {
        let tree: RBTree = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
        let before = tree.keys();
        let _ = tree.render();
        assert_eq!(tree.keys(), before);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn clear_releases_every_node() {
        let mut tree: RBTree = (0..32).collect();
        assert_eq!(tree.clear(), 32);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.search(3).is_none());

        // Tree is reusable after teardown
        tree.insert(8);
        assert!(tree.contains(8));
        assert!(tree.validate().is_ok());
    }
}


// =================================================================
// Unit tests cover rotations and the invariant checker
// =================================================================
#[cfg(test)]
mod rotation_tests {
    use super::key_of;
    use crate::tree::InvariantViolation;
    use crate::RBTree;

    #[test]
    fn rotate_left_promotes_right_child_to_root() {
        let mut tree: RBTree = [2, 1, 3].into_iter().collect();
        let three = tree.search(3).unwrap();
        tree.rotate_left(three);

        assert_eq!(tree.root(), Some(three));
        assert!(tree.node(three).parent().is_none());
        assert_eq!(key_of(&tree, tree.node(three).left()), Some(2));
        assert_eq!(tree.keys(), vec![1, 2, 3]);

        // Colors are untouched, so the red root is reported
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot { key: 3 }));
    }

    #[test]
    fn rotate_right_rehomes_inner_subtree() {
        let mut tree: RBTree = [10, 5, 15, 3, 7].into_iter().collect();
        let five = tree.search(5).unwrap();
        let seven = tree.search(7).unwrap();
        let ten = tree.search(10).unwrap();

        tree.rotate_right(five);

        assert_eq!(tree.root(), Some(five));
        assert_eq!(tree.node(five).right(), Some(ten));
        assert_eq!(tree.node(ten).left(), Some(seven));
        assert_eq!(tree.node(seven).parent(), Some(ten));
        assert_eq!(tree.keys(), vec![3, 5, 7, 10, 15]);
    }

    #[test]
    fn rotations_are_inverse() {
        let mut tree: RBTree = [10, 5, 15, 3, 7, 12, 18].into_iter().collect();
        let before = tree.render();
        let five = tree.search(5).unwrap();
        let ten = tree.search(10).unwrap();

        tree.rotate_right(five);
        tree.rotate_left(ten);

        assert_eq!(tree.render(), before);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn validate_reports_black_height_mismatch() {
        let mut tree: RBTree = [10, 5, 15, 1].into_iter().collect();
        let five = tree.search(5).unwrap();
        tree.rotate_right(five);

        assert!(matches!(
            tree.validate(),
            Err(InvariantViolation::BlackHeight { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a right child")]
    fn rotate_at_root_is_a_programming_error() {
        let mut tree: RBTree = [1].into_iter().collect();
        let root = tree.root().unwrap();
        tree.rotate_left(root);
    }

    #[test]
    fn violation_messages_name_the_key() {
        let violation = InvariantViolation::RedRed { parent: 4, child: 2 };
        assert_eq!(violation.to_string(), "red node 4 has red child 2");
    }
}


// =================================================================
// Property tests over arbitrary insert orders
// =================================================================
#[cfg(test)]
mod property_tests {
    use crate::RBTree;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const MAX_KEYS: usize = 500;

    /// Strict ordering check, only meaningful when all keys are distinct.
    fn assert_strict_order(tree: &RBTree) {
        for id in tree.root().into_iter() {
            let mut stack = vec![id];
            while let Some(id) = stack.pop() {
                let node = tree.node(id);
                if let Some(left) = node.left() {
                    assert!(tree.node(left).key() < node.key());
                    stack.push(left);
                }
                if let Some(right) = node.right() {
                    assert!(tree.node(right).key() > node.key());
                    stack.push(right);
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn invariants_hold_after_every_insert(
            keys in proptest::collection::vec(-1000i64..1000, 0..MAX_KEYS)
        ) {
            let mut tree = RBTree::new();
            for key in &keys {
                tree.insert(*key);
                prop_assert!(tree.validate().is_ok());
            }
            prop_assert_eq!(tree.len(), keys.len());
        }

        #[test]
        fn membership_matches_inserted_keys(
            keys in proptest::collection::vec(-1000i64..1000, 0..MAX_KEYS),
            probes in proptest::collection::vec(-1200i64..1200, 0..50)
        ) {
            let tree: RBTree = keys.iter().copied().collect();
            for key in &keys {
                prop_assert!(tree.contains(*key));
            }
            for probe in &probes {
                prop_assert_eq!(tree.contains(*probe), keys.contains(probe));
            }
        }

        #[test]
        fn in_order_keys_are_sorted(
            keys in proptest::collection::vec(any::<i64>(), 0..MAX_KEYS)
        ) {
            let tree: RBTree = keys.iter().copied().collect();
            let mut sorted = keys.clone();
            sorted.sort();
            prop_assert_eq!(tree.keys(), sorted);
        }

        #[test]
        fn distinct_keys_are_strictly_ordered(
            keys in proptest::collection::hash_set(-10_000i64..10_000, 0..MAX_KEYS)
        ) {
            let tree: RBTree = keys.into_iter().collect();
            assert_strict_order(&tree);
        }

        #[test]
        fn permutations_stay_valid(
            keys in proptest::collection::vec(-500i64..500, 1..MAX_KEYS),
            seed in any::<u64>()
        ) {
            // Shapes may differ between orders; only validity is compared
            let mut shuffled = keys.clone();
            shuffled.shuffle(&mut Pcg64::seed_from_u64(seed));

            let first: RBTree = keys.iter().copied().collect();
            let second: RBTree = shuffled.into_iter().collect();
            prop_assert!(first.validate().is_ok());
            prop_assert!(second.validate().is_ok());
            prop_assert_eq!(first.keys(), second.keys());
        }
    }
}
