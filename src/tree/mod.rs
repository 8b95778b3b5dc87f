//! Ordered balanced tree.
//!
//! ## Architecture
//!
//! The tree is a red-black tree whose nodes live in a slab:
//!
//! - **Slab-based storage**: O(1) node allocation and release
//! - **Index links**: children and parent are slab keys, so rotations can
//!   rewire parent pointers without fighting the ownership model
//! - **Handles**: tree id + slab key + generation, validated on every use
//!
//! ## Components
//!
//! - [`TreeNode`]: Payload, color and links for one node
//! - [`RedBlackTree`]: The tree, its rotations, search and in-order iteration
//! - `insert` / `delete`: Mutations with their fixup passes
//! - [`Export`]: Breadth-first export with NIL sentinels, plus state root
//! - [`TreeStats`]: Result of [`RedBlackTree::validate`]
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Search | O(log n) |
//! | Delete by handle | O(log n) |
//! | Handle lookup | O(1) |
//! | Export / state root | O(n) |
//!
//! ## Example
//!
//! ```
//! use redblack::RedBlackTree;
//!
//! let mut tree = RedBlackTree::from_keys(&[1, 2, 3, 4, 5, 6, 7]);
//!
//! let seven = tree.search(7).unwrap();
//! tree.delete(seven).unwrap();
//!
//! assert_eq!(tree.len(), 6);
//! assert!(tree.validate().is_ok());
//! ```

pub mod node;
pub mod rbtree;
mod insert;
mod delete;
pub mod export;
pub mod validate;

pub use node::TreeNode;
pub use rbtree::{Iter, RedBlackTree};
pub use export::Export;
pub use validate::TreeStats;
