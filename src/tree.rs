//! An unbalanced Binary Search Tree that keeps duplicates. Values equal to a node's value are
//! routed to its right subtree, so the tree behaves like a sorted multiset. Nothing is ever
//! rotated: inserting values in sorted order produces a tree shaped like a linked list.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//!
//! let mut tree = BinaryTree::<i32>::new();
//! assert!(tree.empty());
//!
//! tree.add(5);
//! tree.add(4);
//! tree.add(6);
//! tree.add(5);
//!
//! assert_eq!(tree.count(&5), 2);
//! assert_eq!(tree.in_order(), vec![&4, &5, &5, &6]);
//!
//! // Removing a value removes every copy of it.
//! tree.remove(&5);
//! assert!(!tree.contains(&5));
//! assert_eq!(tree.size(), 2);
//!
//! // Absent values are ignored.
//! tree.add(None);
//! tree.remove(None);
//! assert_eq!(tree.size(), 2);
//! ```
//!
//! Adding, removing, counting, `height`, `size`, `Debug` and the pre-, in- and post-order
//! traversals recurse once per level, so on a degenerate tree of `n` nodes they recurse `n`
//! deep. Cloning, dropping (of a tree or of a detached [`Node`]), clearing, equality, hashing,
//! level order and [`BinaryTree::verify`] use explicit stacks and do not recurse.

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::{debug, instrument, trace};

use crate::error::OrderViolation;
use crate::node::Node;

type Link<T> = Option<Box<Node<T>>>;

/// The closest ancestor bounding a subtree during [`BinaryTree::verify`], with its depth.
type Bound<'a, T> = Option<(&'a T, usize)>;

/// A Binary Search Tree holding any number of copies of each value.
///
/// For every node, values in its left subtree are strictly less than its value and values in its
/// right subtree are greater than or equal to it.
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinaryTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("root", &self.root())
            .finish()
    }
}

/// Lists the values in level order after a `Tree:` prefix.
///
/// ```
/// use bintree::BinaryTree;
///
/// let tree: BinaryTree<_> = [5, 4, 6].into_iter().collect();
/// assert_eq!(tree.to_string(), "Tree: 5 4 6");
/// ```
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree:")?;
        for value in self.level_order() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Two trees are equal when they have the same shape and equal values in the same positions.
/// Trees holding the same values but built in a different order are usually not equal.
impl<T: PartialEq> PartialEq for BinaryTree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self.root(), other.root())];
        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(mine), Some(theirs)) => {
                    if mine.value != theirs.value {
                        return false;
                    }
                    pending.push((mine.left(), theirs.left()));
                    pending.push((mine.right(), theirs.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for BinaryTree<T> {}

impl<T: Hash> Hash for BinaryTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pre-order with a marker per slot so differently shaped trees hash differently.
        let mut pending = vec![self.root()];
        while let Some(slot) = pending.pop() {
            match slot {
                None => state.write_u8(0),
                Some(node) => {
                    state.write_u8(1);
                    node.value.hash(state);
                    pending.push(node.right());
                    pending.push(node.left());
                }
            }
        }
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Wraps an already assembled node structure. Nothing checks that `root` is ordered; use
    /// [`BinaryTree::verify`] for that.
    pub fn from_root(root: Option<Node<T>>) -> Self {
        Self {
            root: root.map(Box::new),
        }
    }

    /// Takes the node structure out of the tree.
    pub fn into_root(self) -> Option<Node<T>> {
        self.root.map(|root| *root)
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Adds a value to the tree. Copies of values already present are kept, not rejected.
    /// Passing `None` does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::<i32>::new();
    /// tree.add(1);
    /// tree.add(1);
    /// tree.add(None);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.count(&1), 2);
    /// ```
    #[instrument(level = "trace", skip_all)]
    pub fn add<V>(&mut self, value: V)
    where
        V: Into<Option<T>>,
        T: Ord,
    {
        let Some(value) = value.into() else {
            trace!("ignoring add of absent value");
            return;
        };

        match self.root.as_deref_mut() {
            Some(root) => {
                let direction = if value < root.value { "left" } else { "right" };
                let depth = root.add(value);
                trace!(direction, depth, "added value");
            }
            None => {
                self.root = Some(Node::new_boxed(value));
                trace!("added value as root");
            }
        }
    }

    /// Removes every copy of `value` from the tree. Removing a value that isn't present, or
    /// passing `None`, leaves the tree unchanged.
    ///
    /// A removed node with two children takes the value of its in-order successor, which is
    /// then unlinked from the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree: BinaryTree<_> = [10, 5, 15, 10].into_iter().collect();
    /// tree.remove(&10);
    ///
    /// assert_eq!(tree.in_order(), vec![&5, &15]);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn remove<'a, V>(&mut self, value: V)
    where
        V: Into<Option<&'a T>>,
        T: PartialEq + 'a,
    {
        let Some(value) = value.into() else {
            trace!("ignoring remove of absent value");
            return;
        };
        if self.root.is_none() {
            trace!("nothing to remove from empty tree");
            return;
        }

        let mut removed = 0;
        self.root = Node::remove_all(self.root.take(), value, &mut removed);
        debug!(removed, "removed value");
    }

    /// Whether at least one copy of `value` is in the tree. Always `false` for `None`.
    pub fn contains<'a, V>(&self, value: V) -> bool
    where
        V: Into<Option<&'a T>>,
        T: PartialEq + 'a,
    {
        self.count(value) > 0
    }

    /// How many copies of `value` are in the tree. Always `0` for `None`.
    ///
    /// This visits every node.
    pub fn count<'a, V>(&self, value: V) -> usize
    where
        V: Into<Option<&'a T>>,
        T: PartialEq + 'a,
    {
        match (value.into(), self.root()) {
            (Some(value), Some(root)) => root.count(value),
            _ => 0,
        }
    }

    /// Number of edges on the longest path from the root to a leaf. A single node has height 0
    /// and an empty tree has height -1.
    pub fn height(&self) -> isize {
        Node::height(self.root())
    }

    /// Number of nodes in the tree, copies included.
    pub fn size(&self) -> usize {
        self.root().map_or(0, Node::size)
    }

    /// Whether the tree holds no values.
    pub fn empty(&self) -> bool {
        self.root.is_none()
    }

    /// Alias of [`BinaryTree::empty`].
    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Drops every node, leaving the tree empty. Safe for arbitrarily deep trees.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Values with each node visited before its left subtree, then its right subtree.
    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.pre_order(&mut values);
        }
        values
    }

    /// Values with each node visited between its left and right subtrees. This is sorted.
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.in_order(&mut values);
        }
        values
    }

    /// Values with each node visited after both of its subtrees.
    pub fn post_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        if let Some(root) = self.root() {
            root.post_order(&mut values);
        }
        values
    }

    /// Values level by level from the root, left to right within a level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            values.push(&node.value);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        values
    }

    /// Checks the BST property over the whole tree. Trees built only through [`BinaryTree::add`]
    /// and [`BinaryTree::remove`] always pass; trees assembled by hand with
    /// [`BinaryTree::from_root`] may not.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, Node, OrderViolation};
    ///
    /// let backwards = Node::with_children(5, Some(Node::new(9)), None);
    /// let tree = BinaryTree::from_root(Some(backwards));
    ///
    /// assert_eq!(
    ///     tree.verify(),
    ///     Err(OrderViolation::LeftNotLess { depth: 1, ancestor_depth: 0 })
    /// );
    /// ```
    pub fn verify(&self) -> Result<(), OrderViolation>
    where
        T: Ord,
    {
        let mut pending: Vec<(&Node<T>, usize, Bound<'_, T>, Bound<'_, T>)> = self
            .root()
            .map(|root| (root, 0, None, None))
            .into_iter()
            .collect();

        // Only the closest bounding ancestors are carried; each ancestor already passed the
        // ones above it.
        while let Some((node, depth, lower, upper)) = pending.pop() {
            if let Some((bound, ancestor_depth)) = upper {
                if node.value >= *bound {
                    return Err(OrderViolation::LeftNotLess {
                        depth,
                        ancestor_depth,
                    });
                }
            }
            if let Some((bound, ancestor_depth)) = lower {
                if node.value < *bound {
                    return Err(OrderViolation::RightLess {
                        depth,
                        ancestor_depth,
                    });
                }
            }

            if let Some(right) = node.right() {
                pending.push((right, depth + 1, Some((&node.value, depth)), upper));
            }
            if let Some(left) = node.left() {
                pending.push((left, depth + 1, lower, Some((&node.value, depth))));
            }
        }

        Ok(())
    }
}

impl<T> Node<T> {
    /// Adds `value` somewhere below this node and returns the depth, relative to this node, of
    /// the new leaf.
    fn add(&mut self, value: T) -> usize
    where
        T: Ord,
    {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(node) => node.add(value) + 1,
            None => {
                *child = Some(Self::new_boxed(value));
                1
            }
        }
    }

    /// Removes every node holding `value` from the subtree and returns what is left of it. Both
    /// children are cleaned before this node is looked at, so by the time a two-children node is
    /// spliced its right subtree no longer holds `value`.
    fn remove_all(link: Link<T>, value: &T, removed: &mut usize) -> Link<T>
    where
        T: PartialEq,
    {
        let mut node = link?;
        node.left = Self::remove_all(node.left.take(), value, removed);
        node.right = Self::remove_all(node.right.take(), value, removed);

        if node.value != *value {
            return Some(node);
        }

        *removed += 1;
        match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(right)) => Some(right),
            (Some(left), None) => Some(left),
            (Some(left), Some(right)) => {
                let (mut successor, rest) = Self::take_smallest(right);
                std::mem::swap(&mut node.value, &mut successor.value);
                node.left = Some(left);
                node.right = rest;
                Some(node)
            }
        }
    }

    /// Unlinks the leftmost node of the subtree, returning it childless along with the remaining
    /// subtree.
    fn take_smallest(mut node: Box<Self>) -> (Box<Self>, Link<T>) {
        match node.left.take() {
            Some(left) => {
                let (smallest, rest) = Self::take_smallest(left);
                node.left = rest;
                (smallest, Some(node))
            }
            None => {
                let right = node.right.take();
                (node, right)
            }
        }
    }

    fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        usize::from(self.value == *value)
            + self.left().map_or(0, |n| n.count(value))
            + self.right().map_or(0, |n| n.count(value))
    }

    /// An absent subtree has height -1 so it never wins over a present sibling.
    fn height(node: Option<&Self>) -> isize {
        node.map_or(-1, |n| {
            1 + Self::height(n.left()).max(Self::height(n.right()))
        })
    }

    fn size(&self) -> usize {
        1 + self.left().map_or(0, Self::size) + self.right().map_or(0, Self::size)
    }

    fn pre_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        values.push(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(values);
        }
        if let Some(right) = self.right() {
            right.pre_order(values);
        }
    }

    fn in_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.in_order(values);
        }
        values.push(&self.value);
        if let Some(right) = self.right() {
            right.in_order(values);
        }
    }

    fn post_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.post_order(values);
        }
        if let Some(right) = self.right() {
            right.post_order(values);
        }
        values.push(&self.value);
    }
}
