//! The four traversal orders over a subtree.
//!
//! Every traversal takes a visitor (`FnMut(&Node<T>)`) invoked exactly
//! once per node. An absent subtree produces zero visits. The visitor type
//! is checked at compile time, so there is no runtime "callback required"
//! error to raise.

use std::collections::VecDeque;

use super::node::Node;

/// Breadth-first: root first, then each level left to right.
///
/// Queue-driven: dequeue, visit, enqueue left then right child.
pub(crate) fn level_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut queue = VecDeque::new();
    if let Some(node) = root {
        queue.push_back(node);
    }
    while let Some(node) = queue.pop_front() {
        visit(node);
        if let Some(left) = node.left() {
            queue.push_back(left);
        }
        if let Some(right) = node.right() {
            queue.push_back(right);
        }
    }
}

/// Depth-first, left subtree / node / right subtree.
///
/// Visits values in ascending order by the search invariant.
pub(crate) fn in_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    in_order_impl(root, &mut visit);
}

fn in_order_impl<'a, T, F>(link: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(node) = link {
        in_order_impl(node.left(), visit);
        visit(node);
        in_order_impl(node.right(), visit);
    }
}

/// Depth-first, node / left subtree / right subtree.
pub(crate) fn pre_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    pre_order_impl(root, &mut visit);
}

fn pre_order_impl<'a, T, F>(link: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(node) = link {
        visit(node);
        pre_order_impl(node.left(), visit);
        pre_order_impl(node.right(), visit);
    }
}

/// Depth-first, left subtree / right subtree / node.
pub(crate) fn post_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    post_order_impl(root, &mut visit);
}

fn post_order_impl<'a, T, F>(link: Option<&'a Node<T>>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(node) = link {
        post_order_impl(node.left(), visit);
        post_order_impl(node.right(), visit);
        visit(node);
    }
}
