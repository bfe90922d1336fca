//! Binary search tree with strict ordering and whole-tree rebalancing.
//!
//! Construction deduplicates and sorts its input, then builds the unique
//! minimal-height shape for the resulting sequence. Insertion and removal
//! are plain recursive descents that never rebalance; callers that bulk
//! insert and need a shallow tree call [`Tree::rebalance`], which rebuilds
//! the whole structure from its in-order values.
//!
//! Single-threaded by design: no internal locking, no suspension points.
//! Recursion depth is bounded by tree height, so a long unbalanced chain
//! (for example many ascending inserts without a rebalance) costs stack
//! proportional to element count. That is a documented resource risk, not
//! a defect.

mod node;
mod traversal;

pub use node::Node;

use std::fmt;

use tracing::debug;

use node::Link;

/// Binary search tree over values with a total order.
///
/// For every node, all values in its left subtree compare less than the
/// node's value and all values in its right subtree compare greater.
/// Duplicates are never stored.
#[derive(Debug)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Tree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Check whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Visit every node breadth-first, level by level, left to right.
    pub fn for_each_level_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::level_order(self.root(), visit);
    }

    /// Visit every node in ascending value order.
    pub fn for_each_in_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::in_order(self.root(), visit);
    }

    /// Visit every node parent-first (node, left subtree, right subtree).
    pub fn for_each_pre_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::pre_order(self.root(), visit);
    }

    /// Visit every node children-first (left subtree, right subtree, node).
    pub fn for_each_post_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        traversal::post_order(self.root(), visit);
    }

    /// Values in ascending order.
    pub fn values_in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each_in_order(|node| values.push(node.value()));
        values
    }

    /// Values in pre-order.
    pub fn values_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each_pre_order(|node| values.push(node.value()));
        values
    }

    /// Values in post-order.
    pub fn values_post_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each_post_order(|node| values.push(node.value()));
        values
    }

    /// Values in level order.
    pub fn values_level_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.for_each_level_order(|node| values.push(node.value()));
        values
    }

    /// Check the balance invariant over the whole tree: every node's two
    /// subtrees differ in height by at most 1, transitively for all
    /// descendants, determined in a single bottom-up pass.
    pub fn is_balanced(&self) -> bool {
        node::balanced_height(self.root()).is_some()
    }
}

impl<T: Ord> Tree<T> {
    /// Build a tree from any collection of values.
    ///
    /// Duplicates are dropped, the survivors are sorted ascending, and the
    /// midpoint partition produces the minimal-height shape for that
    /// sequence. Any input is accepted; an empty one yields an empty tree.
    pub fn from_values(values: Vec<T>) -> Self {
        let mut values = values;
        values.sort_unstable();
        values.dedup();
        Self {
            root: node::build_balanced(values),
        }
    }

    /// Insert a value as a new leaf at its ordered position.
    ///
    /// Inserting a value already present is a silent no-op. No rebalancing
    /// happens; only an empty tree gains a new root.
    pub fn insert(&mut self, value: T) {
        node::insert(&mut self.root, value);
    }

    /// Remove a value, splicing the tree back together around it.
    ///
    /// Removing a value that is not present is a no-op. Removal preserves
    /// the ordering invariant but may leave the tree unbalanced; no
    /// automatic rebalance is triggered.
    pub fn remove(&mut self, value: &T) {
        node::remove(&mut self.root, value);
    }

    /// Locate the node holding `value`, or `None` if it is not present.
    ///
    /// O(height) descent.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        node::find(self.root(), value)
    }

    /// Height of the node holding `value`: the number of edges on the
    /// longest path from that node down to a leaf. A leaf reports 0.
    /// Returns `None` when the value is absent, which is distinct from a
    /// height of zero.
    pub fn height(&self, value: &T) -> Option<usize> {
        let found = self.find(value)?;
        Some(node::height(Some(found)) as usize)
    }

    /// Number of edges from the root to the node holding `value`, or
    /// `None` when the value is absent.
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut current = self.root();
        let mut edges = 0;
        while let Some(found) = current {
            match value.cmp(found.value()) {
                std::cmp::Ordering::Equal => return Some(edges),
                std::cmp::Ordering::Less => current = found.left(),
                std::cmp::Ordering::Greater => current = found.right(),
            }
            edges += 1;
        }
        None
    }

    /// Rebuild the tree into its minimal-height shape.
    ///
    /// Extracts all values in-order (already ascending and duplicate-free
    /// by the search invariant) and rebuilds via the midpoint partition.
    /// The old node graph is discarded; node identity does not survive.
    pub fn rebalance(&mut self) {
        let mut values = Vec::new();
        node::drain_in_order(self.root.take(), &mut values);
        debug!(count = values.len(), "rebuilding tree from in-order values");
        self.root = node::build_balanced(values);
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sideways tree diagram: the right subtree is printed above its parent,
/// the left below, with box-drawing branch characters.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => writeln!(f, "(empty tree)"),
            Some(root) => fmt_subtree(root, f, "", true),
        }
    }
}

fn fmt_subtree<T: fmt::Display>(
    node: &Node<T>,
    f: &mut fmt::Formatter<'_>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let deeper = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        fmt_subtree(right, f, &deeper, false)?;
    }
    writeln!(
        f,
        "{prefix}{}{}",
        if is_left { "└── " } else { "┌── " },
        node.value()
    )?;
    if let Some(left) = node.left() {
        let deeper = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        fmt_subtree(left, f, &deeper, true)?;
    }
    Ok(())
}
