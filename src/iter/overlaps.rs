use crate::{diagnostics::Diagnostics, interval::Interval, node::Node};

/// A guided depth-first descent yielding the nodes whose interval overlaps
/// with a query interval.
///
/// At each node N:
///
///   1. if N overlaps the query, yield it and descend into both children;
///   2. else if N has no left child, descend right;
///   3. else if the max of the left subtree is below the query lower bound,
///      descend right;
///   4. else descend left.
///
/// When N does not overlap, only one of its subtrees is explored. Nodes are
/// yielded in pre-order (a node, then its left subtree, then its right
/// subtree).
#[derive(Debug)]
pub(crate) struct OverlapsIter<'a, 'q, D, S> {
    query: &'q Interval<D>,
    stack: Vec<&'a Node<D>>,
    sink: &'a S,
}

impl<'a, 'q, D, S> OverlapsIter<'a, 'q, D, S>
where
    S: Diagnostics,
{
    pub(crate) fn new(root: Option<&'a Node<D>>, query: &'q Interval<D>, sink: &'a S) -> Self {
        Self {
            query,
            stack: root.into_iter().collect(),
            sink,
        }
    }
}

impl<'a, 'q, D, S> Iterator for OverlapsIter<'a, 'q, D, S>
where
    S: Diagnostics,
{
    type Item = &'a Node<D>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            let overlaps = self.query.overlaps(v.interval());
            self.sink
                .overlap_evaluated(self.query, v.interval(), overlaps);

            if overlaps {
                // Visit both subtrees, left first.
                self.stack.extend(v.right());
                self.stack.extend(v.left());
                return Some(v);
            }

            let next = match v.left() {
                None => v.right(),
                Some(left) if left.max_in_subtree() < self.query.low() => {
                    // No interval in the left subtree extends far enough to
                    // reach the query lower bound.
                    v.right()
                }
                Some(left) => Some(left),
            };

            self.stack.extend(next);
        }
    }
}
