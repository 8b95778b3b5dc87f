//! # redblack
//!
//! Arena-backed red-black tree with `i64` keys and satellite values.
//!
//! ## Architecture
//!
//! - **Types**: Colors, directions, handles, export records, errors
//! - **Tree**: Slab-backed red-black tree with rotations, insert/delete
//!   fixups, search, in-order iteration and breadth-first export
//! - **Shell**: Thin command-line front end (key parsing, scripted ops)
//!
//! ## Design Principles
//!
//! 1. **Independent instances**: Every operation acts on the tree it is
//!    called on; handles from another tree are rejected
//! 2. **Index links**: Parent pointers are plain slab keys, never owners
//! 3. **Determinism**: Same operation sequence, same shape, same state root
//! 4. **Synchronous Execution**: Each call leaves the tree fully valid
//!
//! ## Example
//!
//! ```
//! use redblack::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::from_keys(&[10, 20, 30]);
//! let root = tree.root().unwrap();
//! assert_eq!(tree.key_of(root), Some(20));
//! assert_eq!(tree.color_of(root), Some(Color::Black));
//!
//! tree.insert(25, "twenty-five".to_string());
//! let handle = tree.search(10).unwrap();
//! tree.delete(handle).unwrap();
//!
//! assert_eq!(tree.keys().collect::<Vec<_>>(), vec![20, 25, 30]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Color, Dir, NodeHandle, ExportSlot, errors
pub mod types;

/// The red-black tree and its algorithms
pub mod tree;

/// Command-line shell: option parsing and scripted sessions
pub mod shell;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Color, Dir, ExportSlot, InvariantError, NodeHandle, NodeView, TreeError};
pub use tree::{RedBlackTree, TreeStats};
