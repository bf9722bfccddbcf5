use std::fmt::Debug;

use crate::{
    diagnostics::{Diagnostics, LogSink},
    error::Result,
    interval::Interval,
    iter::{IntoIter, LevelOrderIter, OverlapsIter, PreOrderIter, RefIter},
    node::Node,
};

/// An unbalanced binary search tree of [`Interval`], keyed by the interval
/// lower bound and augmented with the maximum upper bound of each subtree.
///
/// Intervals are never rebalanced or relocated once inserted - inserting
/// intervals in sorted order produces a tree with a depth equal to the number
/// of intervals. All operations walk the tree iteratively and remain safe for
/// such degenerate trees.
///
/// Diagnostic records are emitted to the [`Diagnostics`] sink `S`, which
/// defaults to [`LogSink`].
pub struct IntervalTree<D = (), S = LogSink> {
    root: Option<Box<Node<D>>>,
    sink: S,
}

impl<D, S> Default for IntervalTree<D, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_sink(S::default())
    }
}

impl<D> IntervalTree<D> {
    /// Construct an empty tree emitting diagnostics to the [`log`] facade.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D, S> IntervalTree<D, S> {
    pub(crate) fn with_sink(sink: S) -> Self {
        Self { root: None, sink }
    }
}

impl<D, S> IntervalTree<D, S>
where
    S: Diagnostics,
{
    /// Insert `interval` into the tree.
    ///
    /// Intervals with equal lower bounds are placed to the right of the
    /// existing interval. Inserting an interval equal to one already in the
    /// tree adds a second, independent node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`](crate::Error::InvalidInterval) and
    /// leaves the tree unchanged if `interval` does not satisfy
    /// `0 <= low < high`.
    pub fn insert(&mut self, interval: Interval<D>) -> Result<()> {
        interval.validate()?;

        let (low, high) = (interval.low(), interval.high());

        // Descend to the empty child slot the interval belongs in, raising
        // the subtree max of every node on the path.
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            node.observe_high(high);
            slot = node.child_slot_mut(low);
        }

        *slot = Some(Box::new(Node::new(interval)));
        Ok(())
    }

    /// Deletion is not supported - this always returns `false` without
    /// modifying the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`](crate::Error::InvalidInterval) if
    /// `interval` does not satisfy `0 <= low < high`.
    pub fn delete(&mut self, interval: &Interval<D>) -> Result<bool> {
        interval.validate()?;
        self.sink.delete_unsupported(interval);
        Ok(false)
    }

    /// Returns true if an interval equal to `interval` (bounds and data) is
    /// stored in the tree.
    ///
    /// Equality includes the data payload, which the tree is not ordered by,
    /// so this visits every node in the worst case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`](crate::Error::InvalidInterval) if
    /// `interval` does not satisfy `0 <= low < high`.
    pub fn find_exact_match(&self, interval: &Interval<D>) -> Result<bool>
    where
        D: PartialEq,
    {
        interval.validate()?;
        Ok(PreOrderIter::new(self.root()).any(|v| v.interval() == interval))
    }

    /// Search the tree for intervals overlapping with `interval`.
    ///
    /// Bounds are inclusive: intervals sharing only an endpoint with the query
    /// overlap it.
    ///
    /// The search descends into both subtrees of an overlapping node, but into
    /// only one subtree of a node that does not overlap: the right subtree
    /// when the left is empty or its subtree max lies below the query lower
    /// bound, otherwise the left. Overlapping intervals in the subtree not
    /// taken are not returned.
    ///
    /// Results are returned in the order they are encountered (a node, then
    /// its left subtree, then its right subtree).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`](crate::Error::InvalidInterval) if
    /// `interval` does not satisfy `0 <= low < high`.
    pub fn find_overlaps(&self, interval: &Interval<D>) -> Result<Box<[&Interval<D>]>> {
        interval.validate()?;

        let overlaps = OverlapsIter::new(self.root(), interval, &self.sink)
            .map(|v| v.interval())
            .collect::<Box<[_]>>();

        self.sink.overlaps_found(interval, &overlaps);

        Ok(overlaps)
    }

    /// Render the tree in level order.
    ///
    /// The first line summarises the node and level counts, followed by one
    /// line per node describing the node and its immediate children.
    pub fn print_tree(&self) -> String {
        let mut buf = format!(
            "nodes: {}, levels: {}\n",
            self.node_count(),
            self.level_count()
        );

        for (n, _depth) in LevelOrderIter::new(self.root()) {
            buf.push_str(&n.to_string());
            buf.push('\n');
        }

        self.sink.tree_printed(&buf);

        buf
    }
}

impl<D, S> IntervalTree<D, S> {
    /// Count the nodes in the tree.
    ///
    /// This is computed on each call by visiting every node.
    pub fn node_count(&self) -> usize {
        PreOrderIter::new(self.root()).count()
    }

    /// Return the number of levels in the tree, where a tree containing only
    /// a root has 1 level and an empty tree has 0.
    ///
    /// This is computed on each call by visiting every node.
    pub fn level_count(&self) -> usize {
        LevelOrderIter::new(self.root())
            .map(|(_n, depth)| depth)
            .max()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root [`Node`] of the tree, if any.
    pub fn root(&self) -> Option<&Node<D>> {
        self.root.as_deref()
    }

    /// Iterate over the stored intervals in ascending lower bound order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<D>> {
        RefIter::new(self.root()).map(|v| v.interval())
    }
}

impl<D, S> Drop for IntervalTree<D, S> {
    fn drop(&mut self) {
        // Unlink the nodes one at a time instead of recursing through the
        // boxed children.
        drop(IntoIter::new(self.root.take()));
    }
}

impl<D, S> IntoIterator for IntervalTree<D, S> {
    type Item = Interval<D>;
    type IntoIter = IntoIter<D>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}

impl<D, S> Debug for IntervalTree<D, S>
where
    D: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
