use crate::{diagnostics::LogSink, tree::IntervalTree};

/// Construct an empty [`IntervalTree`], optionally with a custom
/// [`Diagnostics`](crate::Diagnostics) sink.
///
/// ```
/// use maxtree::{Interval, IntervalTreeBuilder, NoopSink};
///
/// let mut t = IntervalTreeBuilder::new().with_sink(NoopSink).build();
/// t.insert(Interval::<()>::new(17, 19)).unwrap();
///
/// assert_eq!(t.node_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct IntervalTreeBuilder<S = LogSink> {
    sink: S,
}

impl IntervalTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> IntervalTreeBuilder<S> {
    /// Emit diagnostics for the tree to `sink`.
    pub fn with_sink<T>(self, sink: T) -> IntervalTreeBuilder<T> {
        IntervalTreeBuilder { sink }
    }

    pub fn build<D>(self) -> IntervalTree<D, S> {
        IntervalTree::with_sink(self.sink)
    }
}
