use std::fmt::Display;

use crate::error::{Error, Result};

/// An immutable, closed integer interval `[low, high]`, optionally tagged with
/// an opaque `data` payload.
///
/// Two [`Interval`] are equal when their bounds and their payloads are equal
/// (an absent payload equals only another absent payload).
///
/// Construction does not validate the bounds - the
/// [`IntervalTree`](crate::IntervalTree) rejects intervals that do not satisfy
/// `0 <= low < high` when they are passed to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<D = ()> {
    low: i64,
    high: i64,
    data: Option<D>,
}

impl<D> Interval<D> {
    /// Construct an [`Interval`] with no payload.
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            data: None,
        }
    }

    /// Construct an [`Interval`] carrying `data`.
    pub fn with_data(low: i64, high: i64, data: D) -> Self {
        Self {
            low,
            high,
            data: Some(data),
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Returns true if the bounds describe a non-degenerate, non-negative
    /// interval.
    pub fn is_valid(&self) -> bool {
        self.low < self.high && self.low >= 0 && self.high > 0
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::InvalidInterval {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Returns true if `self` and `other` overlap.
    ///
    /// Bounds are inclusive, so two intervals sharing a single boundary point
    /// overlap. The relation is symmetric and ignores any payload.
    pub fn overlaps<E>(&self, other: &Interval<E>) -> bool {
        let (a, b) = (self, other);

        // Identical bounds.
        (a.low == b.low && a.high == b.high)
            // "a" encloses "b".
            || (a.low <= b.low && a.high >= b.high)
            // "b" encloses "a".
            || (a.low >= b.low && a.high <= b.high)
            // The upper bound of "a" lands within "b".
            || (a.high >= b.low && a.high <= b.high)
            // The lower bound of "a" lands within "b".
            || (a.low >= b.low && a.low <= b.high)
    }
}

impl<D> Display for Interval<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<D> From<(i64, i64)> for Interval<D> {
    fn from((low, high): (i64, i64)) -> Self {
        Self::new(low, high)
    }
}
