//! Errors reported by [`BinaryTree::verify`][crate::BinaryTree::verify].

use thiserror::Error;

/// The BST property does not hold somewhere in the tree. Depths count from the root at 0.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderViolation {
    /// A value in some node's left subtree is not strictly less than that node's value.
    #[error("node at depth {depth} is not less than its ancestor at depth {ancestor_depth}")]
    LeftNotLess {
        /// Depth of the offending node.
        depth: usize,
        /// Depth of the ancestor whose left subtree holds it.
        ancestor_depth: usize,
    },
    /// A value in some node's right subtree is less than that node's value.
    #[error("node at depth {depth} is less than its ancestor at depth {ancestor_depth}")]
    RightLess {
        /// Depth of the offending node.
        depth: usize,
        /// Depth of the ancestor whose right subtree holds it.
        ancestor_depth: usize,
    },
}
