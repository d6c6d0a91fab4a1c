//! This crate exposes an unbalanced Binary Search Tree that stores duplicate values, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and may have child `Node`s. The invariant this crate keeps is:
//!
//! 1. For every `Node` in a [`BinaryTree`], all the `Node`s in its left subtree have a value
//!    strictly less than its own value.
//! 2. For every `Node` in a [`BinaryTree`], all the `Node`s in its right subtree have a value
//!    greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The second rule is what lets the tree keep duplicates: adding a value that is already present
//! sends the copy right. Removing a value removes every copy.
//!
//! Nothing rebalances the tree. Searching takes `O(height)` and the height is `O(N)` in the worst
//! case (for example when values arrive in sorted order), where `N` is the number of nodes.
//!
//! The tree can be walked in pre-order, in-order (sorted), post-order, and level order. Each
//! traversal collects references to the values into a fresh `Vec`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod node;
pub mod tree;

pub use error::OrderViolation;
pub use node::Node;
pub use tree::BinaryTree;
