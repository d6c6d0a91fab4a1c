//! The building block of a [`BinaryTree`][crate::BinaryTree]. A `Node` holds a value and owns
//! up to two child subtrees. It knows nothing about ordering - keeping values sorted is the
//! tree's job.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! let node = Node::with_children(5, Some(Node::new(4)), None);
//!
//! assert!(node.has_left());
//! assert!(!node.has_right());
//! assert!(!node.is_leaf());
//!
//! // Equality only looks at the stored value.
//! assert_eq!(node, Node::new(5));
//! ```

use std::hash::{Hash, Hasher};

/// A value with two optional, exclusively owned, child subtrees.
///
/// Two `Node`s are equal when their values are equal. Their children are not considered.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Constructs a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Constructs a node holding `value` with the given subtrees. Either subtree may be absent.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value, handing back the old one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// The left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Mutable access to the left subtree, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right subtree, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Replaces the left subtree. The previous subtree is returned so the caller can reattach it
    /// elsewhere; if it is ignored it is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let mut node = Node::with_children(5, Some(Node::new(3)), None);
    /// let old = node.set_left(Some(Node::new(4)));
    ///
    /// assert_eq!(old, Some(Node::new(3)));
    /// assert_eq!(node.left(), Some(&Node::new(4)));
    /// ```
    pub fn set_left(&mut self, left: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, left.map(Box::new)).map(|n| *n)
    }

    /// Replaces the right subtree. See [`Node::set_left`].
    pub fn set_right(&mut self, right: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, right.map(Box::new)).map(|n| *n)
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Option<Node<T>> {
        self.set_left(None)
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Option<Node<T>> {
        self.set_right(None)
    }

    /// Whether this node has neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Whether a left subtree is present.
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Whether a right subtree is present.
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }
}

/// Clones the subtrees with an explicit stack, so arbitrarily deep chains don't overflow.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: clone_subtree(self.left()),
            right: clone_subtree(self.right()),
        }
    }
}

enum CloneStep<'a, T> {
    Visit(Option<&'a Node<T>>),
    Build(&'a Node<T>),
}

/// Post-order rebuild: both children of a node are finished before the node itself.
fn clone_subtree<T: Clone>(subtree: Option<&Node<T>>) -> Option<Box<Node<T>>> {
    let mut steps = vec![CloneStep::Visit(subtree)];
    let mut built: Vec<Option<Box<Node<T>>>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            CloneStep::Visit(None) => built.push(None),
            CloneStep::Visit(Some(node)) => {
                steps.push(CloneStep::Build(node));
                steps.push(CloneStep::Visit(node.right()));
                steps.push(CloneStep::Visit(node.left()));
            }
            CloneStep::Build(node) => {
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}

/// Drops the subtrees with an explicit stack, so arbitrarily deep chains don't overflow.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Hashes only the value so it agrees with `PartialEq`.
impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
