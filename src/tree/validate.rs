//! Structural invariant checker.
//!
//! Walks the whole tree and reports the first violation found. Used by the
//! test suites after every mutation and available to callers that want to
//! assert consistency at a boundary.

use crate::tree::RedBlackTree;
use crate::types::InvariantError;

/// Shape summary of a valid tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of nodes
    pub len: usize,
    /// Nodes on the longest root-to-leaf path
    pub height: usize,
    /// Black nodes on every root-to-NIL path, NIL excluded
    pub black_height: usize,
}

/// Per-subtree facts gathered bottom-up
struct Subtree {
    count: usize,
    height: usize,
    black_height: usize,
    min: i64,
    max: i64,
}

impl<V> RedBlackTree<V> {
    /// Check every red-black and linkage invariant.
    ///
    /// # Example
    ///
    /// ```
    /// use redblack::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_keys(&[1, 2, 3, 4, 5]);
    /// let stats = tree.validate().unwrap();
    ///
    /// assert_eq!(stats.len, 5);
    /// assert_eq!(stats.black_height, 2);
    /// ```
    pub fn validate(&self) -> Result<TreeStats, InvariantError> {
        let Some(root) = self.root else {
            return match self.nodes.len() {
                0 => Ok(TreeStats::default()),
                stored => Err(InvariantError::CountMismatch {
                    reachable: 0,
                    stored,
                }),
            };
        };

        let node = &self.nodes[root];
        if node.parent.is_some() {
            return Err(InvariantError::BrokenParentLink { key: node.key });
        }
        if node.is_red() {
            return Err(InvariantError::RedRoot { key: node.key });
        }

        let subtree = self.check_subtree(root)?;
        if subtree.count != self.nodes.len() {
            return Err(InvariantError::CountMismatch {
                reachable: subtree.count,
                stored: self.nodes.len(),
            });
        }

        Ok(TreeStats {
            len: subtree.count,
            height: subtree.height,
            black_height: subtree.black_height,
        })
    }

    fn check_subtree(&self, index: usize) -> Result<Subtree, InvariantError> {
        let node = &self.nodes[index];
        let mut result = Subtree {
            count: 1,
            height: 1,
            black_height: 0,
            min: node.key,
            max: node.key,
        };
        let mut child_black_heights = [0usize; 2];

        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_node = &self.nodes[child];

            if child_node.parent != Some(index) {
                return Err(InvariantError::BrokenParentLink { key: child_node.key });
            }
            if node.is_red() && child_node.is_red() {
                return Err(InvariantError::RedRedEdge {
                    key: node.key,
                    child: child_node.key,
                });
            }

            let sub = self.check_subtree(child)?;
            // Left subtree keys <= node key <= right subtree keys
            let out_of_order = if slot == 0 {
                sub.max > node.key
            } else {
                sub.min < node.key
            };
            if out_of_order {
                let child = if slot == 0 { sub.max } else { sub.min };
                return Err(InvariantError::OrderViolation {
                    key: node.key,
                    child,
                });
            }

            result.count += sub.count;
            result.height = result.height.max(sub.height + 1);
            result.min = result.min.min(sub.min);
            result.max = result.max.max(sub.max);
            child_black_heights[slot] = sub.black_height;
        }

        let [left, right] = child_black_heights;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch {
                key: node.key,
                left,
                right,
            });
        }
        result.black_height = left + usize::from(node.color.is_black());
        Ok(result)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
