//! Side-channel observers of [`IntervalTree`](crate::IntervalTree) operations.
//!
//! A [`Diagnostics`] sink is notified as the tree performs work. Sinks
//! observe only - nothing a sink does can change the result of a tree
//! operation.

use crate::interval::Interval;

/// An observer of interval tree operations.
///
/// All methods have no-op default implementations.
pub trait Diagnostics {
    /// Called once for every evaluation of the overlap predicate between the
    /// `query` and a stored interval during an overlap search.
    fn overlap_evaluated<D>(&self, _query: &Interval<D>, _stored: &Interval<D>, _overlaps: bool) {}

    /// Called when an overlap search completes with the full set of
    /// `overlaps` found for `query`.
    fn overlaps_found<D>(&self, _query: &Interval<D>, _overlaps: &[&Interval<D>]) {}

    /// Called with the rendered output of
    /// [`IntervalTree::print_tree()`](crate::IntervalTree::print_tree).
    fn tree_printed(&self, _rendered: &str) {}

    /// Called when a caller requests the removal of `interval`, which is not
    /// supported.
    fn delete_unsupported<D>(&self, _interval: &Interval<D>) {}
}

/// A [`Diagnostics`] sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl Diagnostics for NoopSink {}

/// A [`Diagnostics`] sink forwarding records to the [`log`] facade.
///
/// Overlap search results and tree renderings are emitted at
/// [`log::Level::Info`], individual predicate evaluations and unsupported
/// deletes at [`log::Level::Debug`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn overlap_evaluated<D>(&self, query: &Interval<D>, stored: &Interval<D>, overlaps: bool) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("overlap={overlaps} query={query} stored={stored}");
        }
    }

    fn overlaps_found<D>(&self, query: &Interval<D>, overlaps: &[&Interval<D>]) {
        if !log::log_enabled!(log::Level::Info) {
            return;
        }

        let rendered = overlaps
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        log::info!(
            "scanned tree, found {} overlaps with {query}: [{rendered}]",
            overlaps.len()
        );
    }

    fn tree_printed(&self, rendered: &str) {
        log::info!("{rendered}");
    }

    fn delete_unsupported<D>(&self, interval: &Interval<D>) {
        log::debug!("delete of {interval} requested, deletion is not supported");
    }
}

impl<T> Diagnostics for &T
where
    T: Diagnostics,
{
    fn overlap_evaluated<D>(&self, query: &Interval<D>, stored: &Interval<D>, overlaps: bool) {
        (**self).overlap_evaluated(query, stored, overlaps)
    }

    fn overlaps_found<D>(&self, query: &Interval<D>, overlaps: &[&Interval<D>]) {
        (**self).overlaps_found(query, overlaps)
    }

    fn tree_printed(&self, rendered: &str) {
        (**self).tree_printed(rendered)
    }

    fn delete_unsupported<D>(&self, interval: &Interval<D>) {
        (**self).delete_unsupported(interval)
    }
}
