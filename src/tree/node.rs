//! Tree node for slab-based storage.
//!
//! ## Design
//!
//! `TreeNode` holds a key/value payload, a color tag, and three links.
//! All links are slab keys (`usize`), not references:
//! - `left` / `right`: children, owned through the tree's slab
//! - `parent`: back-reference used only for upward traversal
//!
//! ## Slab Integration
//!
//! Per official slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - Keys may be reused after `slab.remove()`
//! - O(1) insert, remove, and lookup
//!
//! Because keys are reused, each node also carries the `generation` it was
//! stamped with at insertion; handles compare against it.

use crate::types::{Color, Dir};

/// Node stored in the tree's slab.
///
/// ## Memory Layout
///
/// ```text
/// TreeNode<V> {
///     key: i64
///     value: V
///     color: Color
///     left / right / parent: Option<usize>
///     generation: u64
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TreeNode<V> {
    pub key: i64,

    /// Satellite payload (display label by default)
    pub value: V,

    pub color: Color,

    /// Left child (slab key), None for a NIL leaf
    pub left: Option<usize>,

    /// Right child (slab key), None for a NIL leaf
    pub right: Option<usize>,

    /// Parent (slab key), None for the root
    pub parent: Option<usize>,

    /// Insertion stamp, unique within the owning tree
    pub generation: u64,
}

impl<V> TreeNode<V> {
    /// Create a new red, unlinked node
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::tree::TreeNode;
    /// use redblack::types::Color;
    ///
    /// let node = TreeNode::new(10, "10".to_string(), 1);
    ///
    /// assert_eq!(node.color, Color::Red);
    /// assert!(node.is_leaf());
    /// assert!(node.parent.is_none());
    /// ```
    #[inline]
    pub fn new(key: i64, value: V, generation: u64) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
            generation,
        }
    }

    /// Child in the given direction
    #[inline]
    pub fn child(&self, dir: Dir) -> Option<usize> {
        match dir {
            Dir::Left => self.left,
            Dir::Right => self.right,
        }
    }

    /// Replace the child link in the given direction
    #[inline]
    pub fn set_child(&mut self, dir: Dir, child: Option<usize>) {
        match dir {
            Dir::Left => self.left = child,
            Dir::Right => self.right = child,
        }
    }

    /// Check if both children are NIL
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Check if both children are present
    #[inline]
    pub fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
