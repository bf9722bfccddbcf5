use std::collections::VecDeque;

use crate::node::Node;

/// An in-order walk of a subtree, yielding [`Node`] instances in ascending
/// lower bound order.
#[derive(Debug)]
pub(crate) struct RefIter<'a, D> {
    stack: Vec<&'a Node<D>>,
}

impl<'a, D> RefIter<'a, D> {
    pub(crate) fn new(root: Option<&'a Node<D>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<D>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, D> Iterator for RefIter<'a, D> {
    type Item = &'a Node<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}

/// A depth-first, pre-order walk of a subtree driven by a LIFO work stack.
///
/// Visits every node exactly once, a parent always before its children.
#[derive(Debug)]
pub(crate) struct PreOrderIter<'a, D> {
    stack: Vec<&'a Node<D>>,
}

impl<'a, D> PreOrderIter<'a, D> {
    pub(crate) fn new(root: Option<&'a Node<D>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, D> Iterator for PreOrderIter<'a, D> {
    type Item = &'a Node<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited first.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}

/// A breadth-first walk of a subtree, yielding nodes level by level (left to
/// right within a level) alongside their depth (the root is at depth 1).
#[derive(Debug)]
pub(crate) struct LevelOrderIter<'a, D> {
    queue: VecDeque<(&'a Node<D>, usize)>,
}

impl<'a, D> LevelOrderIter<'a, D> {
    pub(crate) fn new(root: Option<&'a Node<D>>) -> Self {
        Self {
            queue: root.map(|v| (v, 1)).into_iter().collect(),
        }
    }
}

impl<'a, D> Iterator for LevelOrderIter<'a, D> {
    type Item = (&'a Node<D>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (v, depth) = self.queue.pop_front()?;

        for child in [v.left(), v.right()].into_iter().flatten() {
            self.queue.push_back((child, depth + 1));
        }

        Some((v, depth))
    }
}
