//! Deletion and double-black fixup.
//!
//! ## Structural cases
//!
//! - **Two children**: the in-order predecessor `P` (rightmost node of the
//!   left subtree) trades payloads with the target, then `P` is removed.
//!   The target keeps its slot and handle but now carries `P`'s key and
//!   value ("delete-by-copy"). `P`'s own handle becomes invalid.
//! - **One child**: the child is spliced into the removed node's place.
//! - **Leaf**: the node is detached (or the tree becomes empty).
//!
//! ## Fixup
//!
//! Removing a black node leaves its position one black short. With `x` the
//! deficient position on side `d` of parent `p` and sibling `s`:
//!
//! | Sibling | Sibling's children          | Action                                        |
//! |---------|-----------------------------|-----------------------------------------------|
//! | red     | -                           | `s` black, `p` red, rotate at `p` towards `d` |
//! | black   | both black                  | `s` red, move deficiency up to `p`            |
//! | black   | far black, near red         | near black, `s` red, rotate at `s` away       |
//! | black   | far red                     | `s` takes `p`'s color, `p` and far black, rotate at `p`, stop |
//!
//! The loop stops at a red position or the root, which are then colored black.

use std::mem;

use log::{debug, trace};

use crate::tree::RedBlackTree;
use crate::types::{Color, Dir, NodeHandle, TreeError};

impl<V> RedBlackTree<V> {
    /// Delete the node behind `handle`.
    ///
    /// # Returns
    ///
    /// The key and value the handle referred to before the call.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidHandle`] if the handle was issued by another tree
    /// or its node is gone. The tree is not modified in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_keys(&[1, 2, 3]);
    /// let handle = tree.search(2).unwrap();
    ///
    /// let (key, label) = tree.delete(handle).unwrap();
    /// assert_eq!((key, label.as_str()), (2, "2"));
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn delete(&mut self, handle: NodeHandle) -> Result<(i64, V), TreeError> {
        let Some(index) = self.resolve(handle) else {
            debug!("delete rejected: {} not in tree {}", handle, self.id);
            return Err(TreeError::InvalidHandle(handle));
        };

        let target = if self.nodes[index].has_two_children() {
            let pred = self.predecessor(index);
            let (node, pred_node) = self
                .nodes
                .get2_mut(index, pred)
                .expect("predecessor is a distinct live node");
            mem::swap(&mut node.key, &mut pred_node.key);
            mem::swap(&mut node.value, &mut pred_node.value);
            trace!("delete by copy: key {} moved up from predecessor", node.key);
            pred
        } else {
            index
        };

        let (key, value) = self.remove_node(target);
        debug!("delete key {} from tree {}", key, self.id);
        Ok((key, value))
    }

    /// Search for `key` and delete the node found
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::from_keys(&[4, 4]);
    /// assert!(tree.remove_key(4).is_some());
    /// assert!(tree.remove_key(4).is_some());
    /// assert!(tree.remove_key(4).is_none());
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove_key(&mut self, key: i64) -> Option<(i64, V)> {
        let handle = self.search(key)?;
        self.delete(handle).ok()
    }

    /// Rightmost node of the left subtree
    fn predecessor(&self, index: usize) -> usize {
        let mut current = self
            .child(index, Dir::Left)
            .expect("predecessor requires a left subtree");
        while let Some(right) = self.child(current, Dir::Right) {
            current = right;
        }
        current
    }

    /// Unlink and free a node with at most one child, then repair colors
    fn remove_node(&mut self, z: usize) -> (i64, V) {
        let node = &self.nodes[z];
        debug_assert!(!node.has_two_children());
        let child = node.left.or(node.right);
        let color = node.color;
        let slot = node.parent.map(|p| (p, self.dir_of(z, p)));

        self.replace_child(slot.map(|(p, _)| p), z, child);
        let removed = self.nodes.remove(z);

        if color.is_black() {
            self.fix_after_delete(child, slot);
        }
        (removed.key, removed.value)
    }

    /// `x` is the (possibly NIL) position that lost a black node; `slot`
    /// is its parent and the side it hangs on, None at the root.
    fn fix_after_delete(&mut self, mut x: Option<usize>, mut slot: Option<(usize, Dir)>) {
        while let Some((p, side)) = slot {
            if self.is_red(x) {
                break;
            }

            let mut s = self
                .child(p, side.opposite())
                .expect("deficient position must have a sibling");

            if self.nodes[s].is_red() {
                trace!("delete fixup: red sibling {}", self.nodes[s].key);
                self.set_color(s, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                s = self
                    .child(p, side.opposite())
                    .expect("red sibling had black children");
            }

            let near = self.child(s, side);
            let mut far = self.child(s, side.opposite());

            if !self.is_red(near) && !self.is_red(far) {
                trace!("delete fixup: black nephews, push up to {}", self.nodes[p].key);
                self.set_color(s, Color::Red);
                x = Some(p);
                slot = self.parent(p).map(|gp| (gp, self.dir_of(p, gp)));
                continue;
            }

            if !self.is_red(far) {
                trace!("delete fixup: near nephew red, rotate at {}", self.nodes[s].key);
                let near = near.expect("red nephew exists");
                self.set_color(near, Color::Black);
                self.set_color(s, Color::Red);
                self.rotate(s, side.opposite());
                s = self
                    .child(p, side.opposite())
                    .expect("rotated nephew is the new sibling");
                far = self.child(s, side.opposite());
            }

            trace!("delete fixup: far nephew red, rotate at {}", self.nodes[p].key);
            let parent_color = self.nodes[p].color;
            self.set_color(s, parent_color);
            self.set_color(p, Color::Black);
            if let Some(far) = far {
                self.set_color(far, Color::Black);
            }
            self.rotate(p, side);
            x = self.root;
            break;
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tree: &RedBlackTree) -> Vec<i64> {
        tree.keys().collect()
    }

    #[test]
    fn test_delete_scenario_sole_node() {
        let mut tree = RedBlackTree::from_keys(&[42]);
        let handle = tree.search(42).unwrap();

        let removed = tree.delete(handle).unwrap();

        assert_eq!(removed.0, 42);
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.len(), 0);
        assert!(!tree.is_valid(handle));
    }

    #[test]
    fn test_delete_scenario_two_largest_of_seven() {
        let mut tree = RedBlackTree::from_keys(&[1, 2, 3, 4, 5, 6, 7]);

        let seven = tree.search(7).unwrap();
        tree.delete(seven).unwrap();
        tree.validate().expect("valid after deleting 7");

        let six = tree.search(6).unwrap();
        tree.delete(six).unwrap();
        tree.validate().expect("valid after deleting 6");

        assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_delete_scenario_foreign_handle() {
        let mut tree = RedBlackTree::from_keys(&[1, 2, 3]);
        let other = RedBlackTree::from_keys(&[1, 2, 3]);
        let foreign = other.search(2).unwrap();
        let before = tree.state_root().unwrap();

        let result = tree.delete(foreign);

        assert_eq!(result, Err(TreeError::InvalidHandle(foreign)));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.state_root().unwrap(), before);
    }

    #[test]
    fn test_delete_stale_handle() {
        let mut tree = RedBlackTree::from_keys(&[1, 2, 3]);
        let handle = tree.search(3).unwrap();
        tree.delete(handle).unwrap();

        // Slot gets reused by the next insert
        tree.insert_key(9);

        assert_eq!(tree.delete(handle), Err(TreeError::InvalidHandle(handle)));
        assert_eq!(keys(&tree), vec![1, 2, 9]);
    }

    #[test]
    fn test_delete_by_copy_keeps_handle() {
        let mut tree = RedBlackTree::from_keys(&[20, 10, 30]);
        let root = tree.search(20).unwrap();
        let pred = tree.search(10).unwrap();

        let removed = tree.delete(root).unwrap();

        assert_eq!(removed, (20, "20".to_string()));
        // Identity retained, payload replaced
        assert!(tree.is_valid(root));
        assert_eq!(tree.get(root), Some((10, &"10".to_string())));
        assert_eq!(tree.root(), Some(root));
        // The predecessor node was physically removed
        assert!(!tree.is_valid(pred));
        assert_eq!(keys(&tree), vec![10, 30]);
        tree.validate().unwrap();
    }

    #[test]
    fn test_delete_one_child_root() {
        let mut tree = RedBlackTree::from_keys(&[1, 2]);
        let root = tree.search(1).unwrap();

        tree.delete(root).unwrap();

        let new_root = tree.root().unwrap();
        assert_eq!(tree.key_of(new_root), Some(2));
        assert_eq!(tree.color_of(new_root), Some(Color::Black));
        assert!(tree.parent_of(new_root).is_none());
        tree.validate().unwrap();
    }

    #[test]
    fn test_delete_red_leaf_needs_no_fixup() {
        let mut tree = RedBlackTree::from_keys(&[10, 20, 30]);
        let before = tree.black_height();

        tree.remove_key(30).unwrap();

        assert_eq!(tree.black_height(), before);
        assert_eq!(keys(&tree), vec![10, 20]);
        tree.validate().unwrap();
    }

    #[test]
    fn test_delete_black_leaf_with_red_sibling() {
        // After 1..=6 the right side holds a red node with black children;
        // deleting the black leaf on the left exercises the red-sibling case.
        let mut tree = RedBlackTree::from_keys(&[1, 2, 3, 4, 5, 6]);
        tree.validate().unwrap();

        tree.remove_key(1).unwrap();
        tree.validate().unwrap();
        tree.remove_key(3).unwrap();
        tree.validate().unwrap();

        assert_eq!(keys(&tree), vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_delete_every_key_in_every_position() {
        let base: Vec<i64> = (0..32).collect();
        for victim in 0..32 {
            let mut tree = RedBlackTree::from_keys(&base);
            let (key, _) = tree.remove_key(victim).unwrap();

            assert_eq!(key, victim);
            tree.validate()
                .unwrap_or_else(|e| panic!("deleting {victim}: {e}"));
            assert_eq!(tree.len(), 31);
            assert!(!tree.contains_key(victim));
        }
    }

    #[test]
    fn test_delete_all_round_trip() {
        let input = [50, 20, 80, 10, 30, 70, 90, 25, 35, 75, 5, 1];
        let mut tree = RedBlackTree::from_keys(&input);

        for (n, key) in [30, 1, 80, 50, 5, 90, 20, 75, 10, 70, 25, 35].iter().enumerate() {
            tree.remove_key(*key).unwrap();
            tree.validate().unwrap();
            assert_eq!(tree.len(), input.len() - n - 1);
        }

        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_duplicates() {
        let mut tree = RedBlackTree::from_keys(&[5, 5, 5, 3, 5, 7]);

        let mut removed = 0;
        while tree.remove_key(5).is_some() {
            removed += 1;
            tree.validate().unwrap();
        }

        assert_eq!(removed, 4);
        assert_eq!(keys(&tree), vec![3, 7]);
    }

    #[test]
    fn test_trees_are_independent() {
        let mut a = RedBlackTree::from_keys(&[1, 2, 3, 4]);
        let b = RedBlackTree::from_keys(&[1, 2, 3, 4]);
        let b_root = b.state_root().unwrap();

        a.remove_key(2).unwrap();
        a.remove_key(4).unwrap();

        assert_eq!(b.state_root().unwrap(), b_root);
        assert_eq!(b.len(), 4);
        assert_eq!(keys(&a), vec![1, 3]);
    }
}
