use crate::{interval::Interval, node::Node};

/// An iterator of owned [`Interval`] instances as the underlying tree
/// `into_iter()` impl, yielded in ascending lower bound order.
///
/// Every node is unlinked from its children before it is yielded and dropped,
/// so dismantling a tree of any depth never recurses.
#[derive(Debug)]
pub struct IntoIter<D> {
    stack: Vec<Box<Node<D>>>,
}

impl<D> IntoIter<D> {
    pub(crate) fn new(root: Option<Box<Node<D>>>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<D>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<D> Iterator for IntoIter<D> {
    type Item = Interval<D>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        Some(v.into_interval())
    }
}

impl<D> Drop for IntoIter<D> {
    fn drop(&mut self) {
        // Unlink any nodes not yet yielded one at a time.
        for _ in self.by_ref() {}
    }
}
