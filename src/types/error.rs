//! Error types.
//!
//! - [`TreeError`]: recoverable failures surfaced to callers
//! - [`InvariantError`]: what [`crate::RedBlackTree::validate`] reports when a
//!   structural invariant does not hold. A correct tree never produces one.

use thiserror::Error;

use crate::types::NodeHandle;

/// Recoverable failures of tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle was not issued by this tree, or its node has been removed
    #[error("handle {0} does not refer to a node of this tree")]
    InvalidHandle(NodeHandle),

    /// SSZ encoding of an export record failed
    #[error("failed to encode export slot: {0}")]
    Encoding(String),
}

/// A violated red-black or linkage invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node {key} is red")]
    RedRoot { key: i64 },

    #[error("red node {key} has a red child {child}")]
    RedRedEdge { key: i64, child: i64 },

    #[error("black height differs below node {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: i64, left: usize, right: usize },

    #[error("key {child} is on the wrong side of node {key}")]
    OrderViolation { key: i64, child: i64 },

    #[error("parent link of node {key} is inconsistent")]
    BrokenParentLink { key: i64 },

    #[error("{reachable} nodes reachable from the root but {stored} stored")]
    CountMismatch { reachable: usize, stored: usize },
}
