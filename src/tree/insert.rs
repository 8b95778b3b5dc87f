//! Insertion and red-red fixup.
//!
//! ## Algorithm
//!
//! 1. Empty tree: the new node becomes a black root.
//! 2. Otherwise descend (`key < node.key` goes left, anything else goes
//!    right, so duplicates land to the right), hang a red node in the empty
//!    slot, then repair.
//!
//! ## Fixup
//!
//! While `n`'s parent `p` is red, with grandparent `g` and uncle `u`:
//!
//! | Uncle | Shape               | Action                                       |
//! |-------|---------------------|----------------------------------------------|
//! | red   | any                 | `p`, `u` black, `g` red, continue from `g`   |
//! | black | inner (zig-zag)     | rotate at `p` towards `p`'s side, then outer |
//! | black | outer (zig-zig)     | `p` black, `g` red, rotate at `g`, stop      |
//!
//! The root is recolored black afterwards.

use log::{debug, trace};

use crate::tree::{RedBlackTree, TreeNode};
use crate::types::{Color, Dir, NodeHandle};

impl<V> RedBlackTree<V> {
    /// Insert a key with its value.
    ///
    /// Duplicate keys are accepted; each call adds exactly one node.
    ///
    /// # Returns
    ///
    /// A handle to the new node
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let handle = tree.insert(7, "seven");
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.get(handle), Some((7, &"seven")));
    /// ```
    pub fn insert(&mut self, key: i64, value: V) -> NodeHandle {
        let generation = self.next_generation;
        self.next_generation += 1;
        let index = self.nodes.insert(TreeNode::new(key, value, generation));

        let Some(mut current) = self.root else {
            self.nodes[index].color = Color::Black;
            self.root = Some(index);
            debug!("insert key {} as root", key);
            return self.handle_for(index);
        };

        let (parent, dir) = loop {
            let node = &self.nodes[current];
            let dir = if key < node.key { Dir::Left } else { Dir::Right };
            match node.child(dir) {
                Some(next) => current = next,
                None => break (current, dir),
            }
        };
        self.nodes[parent].set_child(dir, Some(index));
        self.nodes[index].parent = Some(parent);
        debug!(
            "insert key {} as {:?} child of {}",
            key, dir, self.nodes[parent].key
        );

        self.fix_after_insert(index);
        self.handle_for(index)
    }

    fn fix_after_insert(&mut self, mut n: usize) {
        while let Some(p) = self.parent(n).filter(|&p| self.nodes[p].is_red()) {
            // A red parent is never the root, so the grandparent exists
            let g = self.parent(p).expect("red node must have a parent");
            let side = self.dir_of(p, g);
            let uncle = self.child(g, side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle, recolor at {}", self.nodes[g].key);
                self.set_color(p, Color::Black);
                if let Some(u) = uncle {
                    self.set_color(u, Color::Black);
                }
                self.set_color(g, Color::Red);
                n = g;
                continue;
            }

            let mut p = p;
            if self.child(p, side.opposite()) == Some(n) {
                trace!("insert fixup: inner child, rotate at {}", self.nodes[p].key);
                self.rotate(p, side);
                n = p;
                p = self.parent(n).expect("rotated node has a parent");
            }

            trace!("insert fixup: outer child, rotate at {}", self.nodes[g].key);
            self.set_color(p, Color::Black);
            self.set_color(g, Color::Red);
            self.rotate(g, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

impl RedBlackTree<String> {
    /// Build a tree by inserting `keys` in order, each labeled with its
    /// decimal text.
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_keys(&[3, 1, 2]);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn from_keys(keys: &[i64]) -> Self {
        let mut tree = Self::with_capacity(keys.len());
        for &key in keys {
            tree.insert_key(key);
        }
        debug!("constructed tree {} from {} keys", tree.id, keys.len());
        tree
    }

    /// Insert a key labeled with its decimal text
    pub fn insert_key(&mut self, key: i64) -> NodeHandle {
        self.insert(key, key.to_string())
    }

    /// Insert with an optional label, defaulting to the key's decimal text
    pub fn insert_labeled(&mut self, key: i64, label: Option<String>) -> NodeHandle {
        let label = label.unwrap_or_else(|| key.to_string());
        self.insert(key, label)
    }
}

impl<V> Extend<(i64, V)> for RedBlackTree<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> FromIterator<(i64, V)> for RedBlackTree<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
