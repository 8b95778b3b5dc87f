//! Node handles.
//!
//! A handle names one node of one tree. It carries three parts:
//!
//! ```text
//! NodeHandle {
//!     tree: u64        // process-unique id of the owning tree
//!     index: usize     // slab key of the node
//!     generation: u64  // per-tree insertion counter stamped on the node
//! }
//! ```
//!
//! Slab keys are reused after removal, so `index` alone cannot tell a live
//! node from a stale one. The generation stamp closes that gap, and the tree
//! id rejects handles minted by a different tree instance.

use std::fmt;

/// Opaque reference to a node, obtained from `insert` or `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) tree: u64,
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl NodeHandle {
    #[inline]
    pub(crate) fn new(tree: u64, index: usize, generation: u64) -> Self {
        Self {
            tree,
            index,
            generation,
        }
    }

    /// Id of the tree that issued this handle
    #[inline]
    pub fn tree_id(&self) -> u64 {
        self.tree
    }

    /// Slab key of the referenced node
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tree#{}/node#{}@{}", self.tree, self.index, self.generation)
    }
}
