//! Red-black tree over a slab arena.
//!
//! ## Architecture
//!
//! - **Slab**: Owns every node; links between nodes are slab keys
//! - **Root**: The only entry point into the structure
//! - **Tree id / generation counter**: Make handles tree-scoped and
//!   detect handles whose node has been removed
//!
//! Insertion lives in `insert.rs`, deletion in `delete.rs`, the
//! breadth-first export in `export.rs` and the invariant checker in
//! `validate.rs`. This file holds the struct, link surgery and rotations.
//!
//! ## Invariants
//!
//! Between public calls:
//! 1. In-order keys are non-decreasing (equal keys are routed right on descent)
//! 2. The root is black
//! 3. No red node has a red child
//! 4. Every root-to-NIL path crosses the same number of black nodes
//! 5. `node.parent == p` iff `p.left == node` or `p.right == node`
//!
//! ## Example
//!
//! ```
//! use redblack::RedBlackTree;
//! use redblack::types::Color;
//!
//! let tree = RedBlackTree::from_keys(&[10, 20, 30]);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.key_of(root), Some(20));
//! assert_eq!(tree.color_of(root), Some(Color::Black));
//! assert_eq!(tree.keys().collect::<Vec<_>>(), vec![10, 20, 30]);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;
use slab::Slab;

use crate::tree::TreeNode;
use crate::types::{Color, Dir, NodeHandle};

/// Source of process-unique tree ids
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

fn next_tree_id() -> u64 {
    NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Ordered balanced tree keyed by `i64`.
///
/// Each instance is fully independent: rotations and fixups only ever
/// touch the instance they are called on.
#[derive(Debug)]
pub struct RedBlackTree<V = String> {
    /// Node storage
    /// Key: slab index, Value: TreeNode
    pub(crate) nodes: Slab<TreeNode<V>>,

    /// Slab key of the root, None when empty
    pub(crate) root: Option<usize>,

    /// Id stamped into every handle this tree issues
    pub(crate) id: u64,

    /// Next generation stamp for inserted nodes
    pub(crate) next_generation: u64,
}

impl<V> Default for RedBlackTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for RedBlackTree<V> {
    /// The clone gets its own id, so handles from the source tree are
    /// rejected by the copy.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            id: next_tree_id(),
            next_generation: self.next_generation,
        }
    }
}

impl<V> RedBlackTree<V> {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            id: next_tree_id(),
            next_generation: 1,
        }
    }

    /// Create a tree with pre-allocated node capacity
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree = RedBlackTree::with_capacity(1_000);
    /// assert!(tree.capacity() >= 1_000);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
            id: next_tree_id(),
            next_generation: 1,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Process-unique id of this tree instance
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of nodes, duplicates included
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Black nodes on the leftmost root-to-NIL path, NIL excluded.
    ///
    /// Equal on every path while the tree is valid.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.color.is_black() {
                count += 1;
            }
            current = node.left;
        }
        count
    }

    /// Remove every node; outstanding handles become invalid
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    // ========================================================================
    // Handles
    // ========================================================================

    /// Handle to the root node
    pub fn root(&self) -> Option<NodeHandle> {
        self.root.map(|index| self.handle_for(index))
    }

    /// Check whether a handle refers to a live node of this tree
    #[inline]
    pub fn is_valid(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Key and value behind a handle
    pub fn get(&self, handle: NodeHandle) -> Option<(i64, &V)> {
        let node = &self.nodes[self.resolve(handle)?];
        Some((node.key, &node.value))
    }

    #[inline]
    pub fn key_of(&self, handle: NodeHandle) -> Option<i64> {
        self.get(handle).map(|(key, _)| key)
    }

    #[inline]
    pub fn value_of(&self, handle: NodeHandle) -> Option<&V> {
        self.get(handle).map(|(_, value)| value)
    }

    /// Mutable access to the satellite value; the key is not exposed
    /// mutably since changing it could break ordering.
    pub fn value_mut(&mut self, handle: NodeHandle) -> Option<&mut V> {
        let index = self.resolve(handle)?;
        Some(&mut self.nodes[index].value)
    }

    pub fn color_of(&self, handle: NodeHandle) -> Option<Color> {
        self.resolve(handle).map(|index| self.nodes[index].color)
    }

    /// Child of a node in the given direction
    pub fn child_of(&self, handle: NodeHandle, dir: Dir) -> Option<NodeHandle> {
        let index = self.resolve(handle)?;
        self.nodes[index].child(dir).map(|child| self.handle_for(child))
    }

    pub fn parent_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        let index = self.resolve(handle)?;
        self.nodes[index].parent.map(|parent| self.handle_for(parent))
    }

    pub(crate) fn handle_for(&self, index: usize) -> NodeHandle {
        NodeHandle::new(self.id, index, self.nodes[index].generation)
    }

    /// Map a handle to a slab key, rejecting foreign and stale handles
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<usize> {
        if handle.tree != self.id {
            return None;
        }
        match self.nodes.get(handle.index) {
            Some(node) if node.generation == handle.generation => Some(handle.index),
            _ => None,
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Find a node with the given key.
    ///
    /// Returns the first match on the descent path; with duplicate keys
    /// other nodes carrying the same key may exist below it.
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_keys(&[5, 3, 8]);
    ///
    /// let handle = tree.search(3).unwrap();
    /// assert_eq!(tree.value_of(handle).map(String::as_str), Some("3"));
    /// assert!(tree.search(4).is_none());
    /// ```
    pub fn search(&self, key: i64) -> Option<NodeHandle> {
        self.find(key).map(|index| self.handle_for(index))
    }

    #[inline]
    pub fn contains_key(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn find(&self, key: i64) -> Option<usize> {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            if key == node.key {
                return Some(index);
            }
            current = if key < node.key { node.left } else { node.right };
        }
        None
    }

    // ========================================================================
    // In-order Traversal
    // ========================================================================

    /// Lazy in-order iterator over `(key, &value)`
    pub fn iter(&self) -> Iter<'_, V> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Keys in non-decreasing order
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter().map(|(key, _)| key)
    }

    // ========================================================================
    // Link Surgery
    // ========================================================================

    /// Color of a possibly absent node; NIL counts as black
    #[inline]
    pub(crate) fn color(&self, index: Option<usize>) -> Color {
        index.map_or(Color::Black, |i| self.nodes[i].color)
    }

    #[inline]
    pub(crate) fn is_red(&self, index: Option<usize>) -> bool {
        self.color(index).is_red()
    }

    #[inline]
    pub(crate) fn set_color(&mut self, index: usize, color: Color) {
        self.nodes[index].color = color;
    }

    #[inline]
    pub(crate) fn parent(&self, index: usize) -> Option<usize> {
        self.nodes[index].parent
    }

    #[inline]
    pub(crate) fn child(&self, index: usize, dir: Dir) -> Option<usize> {
        self.nodes[index].child(dir)
    }

    /// Side of `parent` that `child` hangs on
    #[inline]
    pub(crate) fn dir_of(&self, child: usize, parent: usize) -> Dir {
        if self.nodes[parent].left == Some(child) {
            Dir::Left
        } else {
            Dir::Right
        }
    }

    /// Put `new` where `old` hangs below `parent` (or at the root).
    ///
    /// Also points `new.parent` at `parent`. `old`'s own links are untouched.
    pub(crate) fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let dir = self.dir_of(old, p);
                self.nodes[p].set_child(dir, new);
            }
        }
        if let Some(n) = new {
            self.nodes[n].parent = parent;
        }
    }

    // ========================================================================
    // Rotation Primitives
    // ========================================================================

    /// Rotate `x` down towards `dir`: `Dir::Left` is a left rotation,
    /// `Dir::Right` a right rotation.
    ///
    /// The child on the opposite side (`y`) takes `x`'s place, `x` becomes
    /// `y`'s `dir` child, and `y`'s former `dir` subtree moves under `x`.
    ///
    /// ```text
    ///       x                      y
    ///      / \    rotate(x, L)    / \
    ///     a   y   ----------->   x   c
    ///        / \                / \
    ///       b   c              a   b
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `x` has no child on the opposite side of `dir`; callers
    /// only rotate where the color checks guarantee that child exists.
    pub(crate) fn rotate(&mut self, x: usize, dir: Dir) {
        let y = self
            .child(x, dir.opposite())
            .expect("rotation requires a child on the promoted side");
        trace!("rotate {:?} at key {}", dir, self.nodes[x].key);

        let moved = self.child(y, dir);
        self.nodes[x].set_child(dir.opposite(), moved);
        if let Some(m) = moved {
            self.nodes[m].parent = Some(x);
        }

        let parent = self.parent(x);
        self.replace_child(parent, x, Some(y));

        self.nodes[y].set_child(dir, Some(x));
        self.nodes[x].parent = Some(y);
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// In-order iterator returned by [`RedBlackTree::iter`].
pub struct Iter<'a, V> {
    tree: &'a RedBlackTree<V>,
    stack: Vec<usize>,
}

impl<V> Iter<'_, V> {
    fn push_left_spine(&mut self, mut current: Option<usize>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree.nodes[index].left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (i64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[index];
        self.push_left_spine(node.right);
        Some((node.key, &node.value))
    }
}

impl<'a, V> IntoIterator for &'a RedBlackTree<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
