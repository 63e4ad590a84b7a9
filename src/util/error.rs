use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was used that doesn't refer to an element of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// An operation that requires at least one element was invoked on an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Attempted to access an element of an empty {collection}!")]
pub struct EmptyCollection {
    pub collection: &'static str,
}

/// A range was provided with its start after its end, or its end past the last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Range {start}..={end} is invalid for collection with {len} elements!")]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// The ways that a [`SegmentTree`](crate::collections::segment::SegmentTree) operation can break
/// its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SegmentError {
    Empty(EmptyCollection),
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
}

/// A capacity was requested that can't hold the elements already in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity {cap} is too small for collection with {len} elements!")]
pub struct CapacityUnderflow {
    pub cap: usize,
    pub len: usize,
}
