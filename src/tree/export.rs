//! Breadth-first structural export and state root.
//!
//! ## Export order
//!
//! Level by level from the root, left before right. Every absent child of
//! a materialized node is emitted as an [`ExportSlot::Nil`] at the position
//! the child would occupy:
//!
//! ```text
//!        20            Node(20) Node(10) Node(30) Nil Nil Nil Nil
//!       /  \
//!     10    30
//! ```
//!
//! ## State Root
//!
//! SHA-256 over the SSZ encoding ([`SlotRecord`]) of every export slot in
//! order. Two trees have the same root iff they have the same shape, keys
//! and colors; satellite values are not covered.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use sha2::{Digest, Sha256};

use crate::tree::RedBlackTree;
use crate::types::{ExportSlot, NodeView, SlotRecord, TreeError};

impl<V> RedBlackTree<V> {
    /// Lazy breadth-first export for a layout/rendering layer.
    ///
    /// An empty tree yields nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_keys(&[10, 20, 30]);
    /// let keys: Vec<Option<i64>> = tree.export().map(|slot| slot.key()).collect();
    ///
    /// assert_eq!(keys, vec![Some(20), Some(10), Some(30), None, None, None, None]);
    /// ```
    pub fn export(&self) -> Export<'_, V> {
        Export {
            tree: self,
            queue: self.root.map(|root| Pending::Node(root, 0)).into_iter().collect(),
        }
    }

    /// SHA-256 over the SSZ-encoded export
    pub fn state_root(&self) -> Result<[u8; 32], TreeError> {
        let mut hasher = Sha256::new();
        for slot in self.export() {
            let record = SlotRecord::from(&slot);
            let bytes =
                ssz_rs::serialize(&record).map_err(|e| TreeError::Encoding(format!("{e:?}")))?;
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> Result<String, TreeError> {
        self.state_root().map(hex::encode)
    }
}

enum Pending {
    Node(usize, usize),
    Nil(usize),
}

/// Iterator returned by [`RedBlackTree::export`].
pub struct Export<'a, V> {
    tree: &'a RedBlackTree<V>,
    queue: VecDeque<Pending>,
}

impl<V> Iterator for Export<'_, V> {
    type Item = ExportSlot;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, depth) = match self.queue.pop_front()? {
            Pending::Nil(depth) => return Some(ExportSlot::Nil { depth }),
            Pending::Node(index, depth) => (index, depth),
        };

        let node = &self.tree.nodes[index];
        for child in [node.left, node.right] {
            self.queue.push_back(match child {
                Some(child) => Pending::Node(child, depth + 1),
                None => Pending::Nil(depth + 1),
            });
        }

        Some(ExportSlot::Node(NodeView {
            key: node.key,
            color: node.color,
            depth,
            has_left: node.left.is_some(),
            has_right: node.right.is_some(),
        }))
    }
}

impl<V> FusedIterator for Export<'_, V> {}

// ============================================================================
// Unit Tests
// ============================================================================
