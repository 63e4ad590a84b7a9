//! A module containing [`SegmentTree`], which answers range queries over an associative function
//! (a sum, a minimum, a greatest common divisor...) in `O(log n)` time.
//!
//! The `try_*` methods report broken contracts as a [`SegmentError`], the rest panic with the
//! same message.

mod segment_tree;
mod tests;

pub use segment_tree::*;

#[doc(inline)]
pub use crate::util::error::SegmentError;
