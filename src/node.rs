use std::fmt::Display;

use crate::interval::Interval;

/// A single node of an [`IntervalTree`](crate::IntervalTree), owning the
/// subtrees beneath it.
#[derive(Debug)]
pub struct Node<D> {
    /// Child nodes pointers.
    left: Option<Box<Node<D>>>,
    right: Option<Box<Node<D>>>,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    max_in_subtree: i64,

    interval: Interval<D>,
}

impl<D> Node<D> {
    pub(crate) fn new(interval: Interval<D>) -> Self {
        Self {
            max_in_subtree: interval.high(),
            interval,
            left: None,
            right: None,
        }
    }

    pub fn interval(&self) -> &Interval<D> {
        &self.interval
    }

    /// The largest upper bound of any interval in the subtree rooted at this
    /// node, including the node itself.
    pub fn max_in_subtree(&self) -> i64 {
        self.max_in_subtree
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Raise the subtree max to include an upper bound of `high`.
    ///
    /// The subtree max never decreases.
    pub(crate) fn observe_high(&mut self, high: i64) {
        self.max_in_subtree = self.max_in_subtree.max(high);
    }

    /// Return the child slot an interval with a lower bound of `low` descends
    /// into.
    ///
    /// Lower bounds strictly less than this node's go left, equal or greater
    /// bounds go right.
    pub(crate) fn child_slot_mut(&mut self, low: i64) -> &mut Option<Box<Self>> {
        if low < self.interval.low() {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the [`Interval`] it contains.
    pub(crate) fn into_interval(self) -> Interval<D> {
        self.interval
    }
}

/// Render this node and its immediate children.
impl<D> Display for Node<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "current: {} max={}",
            self.interval, self.max_in_subtree
        )?;

        for (name, child) in [("left", self.left()), ("right", self.right())] {
            match child {
                Some(v) => write!(f, ", {name}: {} max={}", v.interval, v.max_in_subtree)?,
                None => write!(f, ", {name}: none")?,
            }
        }

        Ok(())
    }
}
