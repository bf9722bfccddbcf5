//! An interval tree storing closed integer intervals in an unbalanced binary
//! search tree, augmented with the maximum upper bound of every subtree.
//!
//! The tree answers two queries:
//!
//!   * [`IntervalTree::find_exact_match()`]: is an interval (bounds and payload)
//!     stored in the tree?
//!   * [`IntervalTree::find_overlaps()`]: which stored intervals overlap a query
//!     interval? The subtree max is used to prune subtrees from the search.
//!
//! ```
//! use maxtree::{Interval, IntervalTree};
//!
//! let mut t = IntervalTree::new();
//! for (low, high) in [(17, 19), (21, 24), (5, 8), (4, 8), (15, 18), (7, 10), (16, 22)] {
//!     t.insert(Interval::<()>::new(low, high)).unwrap();
//! }
//!
//! assert_eq!(t.node_count(), 7);
//! assert_eq!(t.level_count(), 4);
//!
//! assert!(t.find_exact_match(&Interval::new(15, 18)).unwrap());
//! assert_eq!(t.find_overlaps(&Interval::new(3, 10)).unwrap().len(), 3);
//! ```
//!
//! Intervals must satisfy `0 <= low < high`, otherwise operations return
//! [`Error::InvalidInterval`].

#![deny(rustdoc::broken_intra_doc_links)]

mod builder;
mod diagnostics;
mod error;
mod interval;
mod iter;
mod node;
mod tree;


pub use builder::*;
pub use diagnostics::*;
pub use error::*;
pub use interval::*;
pub use iter::IntoIter;
pub use node::*;
pub use tree::*;
