use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::contiguous::DynamicArray;
use crate::util::error::{EmptyCollection, IndexOutOfBounds, InvalidRange, SegmentError};
use crate::util::result::ResultExtension;

/// A segment tree over a fixed sequence of items, caching `function` over every segment.
///
/// The shape of the tree is decided once at construction: the range `[0, len)` is split in half
/// (rounding the middle down) until every segment holds a single item. Each internal segment then
/// stores `function(&left, &right)` of its children. Items can be replaced afterwards, but never
/// added or removed.
///
/// `function` must be associative, since the split points are chosen by the tree rather than the
/// caller. It doesn't need to be commutative: the left operand always covers the lower indices.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `new` | `O(n)` |
/// | `query` | `O(log n)` |
/// | `replace_item` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `total` | `O(1)` |
///
/// # Examples
/// ```
/// # use learn_collections::collections::segment::SegmentTree;
/// let mut tree = SegmentTree::new([3, -2, 5, 0, 1, 11, -5], |a, b| a + b);
/// assert_eq!(tree.query(0, 6), 13);
/// assert_eq!(tree.query(2, 4), 6);
/// assert_eq!(tree.replace_item(2, -5), 5);
/// assert_eq!(tree.query(1, 5), 5);
/// ```
pub struct SegmentTree<T, F: Fn(&T, &T) -> T> {
    root: Segment<T>,
    function: F,
}

/// A segment covering the items `[left_bound, right_bound]`.
struct Segment<T> {
    value: T,
    left_bound: usize,
    right_bound: usize,
    children: Option<Box<(Segment<T>, Segment<T>)>>,
}

impl<T, F: Fn(&T, &T) -> T> SegmentTree<T, F> {
    /// Builds a segment tree over `items`, combining them with `function`.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn new<I: IntoIterator<Item = T>>(items: I, function: F) -> SegmentTree<T, F> {
        Self::try_new(items, function).throw()
    }

    /// Builds a segment tree over `items`, combining them with `function`, or returns
    /// [`SegmentError::Empty`] if there are no items.
    pub fn try_new<I: IntoIterator<Item = T>>(
        items: I,
        function: F,
    ) -> Result<SegmentTree<T, F>, SegmentError> {
        let items: DynamicArray<T> = items.into_iter().collect();
        let empty = EmptyCollection {
            collection: "SegmentTree",
        };
        if items.is_empty() {
            return Err(empty.into());
        }

        let last = items.len() - 1;
        let mut leaves = items.into_iter();
        let root = Segment::build(&mut leaves, 0, last, &function).ok_or(empty)?;
        Ok(SegmentTree { root, function })
    }

    /// Returns the number of items in the tree, which is at least 1.
    pub const fn len(&self) -> usize {
        self.root.right_bound + 1
    }

    /// Returns `function` combined over every item in the tree.
    pub const fn total(&self) -> &T {
        &self.root.value
    }

    /// Returns the item at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        Some(self.root.leaf(index))
    }

    /// Replaces the item at `index`, returning the previous one, and recomputes every segment
    /// containing it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn replace_item(&mut self, index: usize, item: T) -> T {
        self.try_replace_item(index, item).throw()
    }

    pub fn try_replace_item(&mut self, index: usize, item: T) -> Result<T, SegmentError> {
        if index >= self.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }
            .into());
        }
        Ok(self.root.replace(index, item, &self.function))
    }
}

impl<T: Clone, F: Fn(&T, &T) -> T> SegmentTree<T, F> {
    /// Returns `function` combined over the items `[start, end]`, with both bounds inclusive.
    ///
    /// # Panics
    /// Panics if `start > end` or `end` is out of bounds.
    pub fn query(&self, start: usize, end: usize) -> T {
        self.try_query(start, end).throw()
    }

    pub fn try_query(&self, start: usize, end: usize) -> Result<T, SegmentError> {
        if start > end || end >= self.len() {
            return Err(InvalidRange {
                start,
                end,
                len: self.len(),
            }
            .into());
        }
        Ok(self.root.query(start, end, &self.function))
    }
}

impl<T> Segment<T> {
    /// Builds the segment `[left_bound, right_bound]`, taking its leaves from `leaves` in order.
    fn build<F: Fn(&T, &T) -> T>(
        leaves: &mut impl Iterator<Item = T>,
        left_bound: usize,
        right_bound: usize,
        function: &F,
    ) -> Option<Segment<T>> {
        if left_bound == right_bound {
            return Some(Segment {
                value: leaves.next()?,
                left_bound,
                right_bound,
                children: None,
            });
        }

        let middle = left_bound + (right_bound - left_bound) / 2;
        let left = Segment::build(leaves, left_bound, middle, function)?;
        let right = Segment::build(leaves, middle + 1, right_bound, function)?;
        Some(Segment {
            value: function(&left.value, &right.value),
            left_bound,
            right_bound,
            children: Some(Box::new((left, right))),
        })
    }

    fn leaf(&self, index: usize) -> &T {
        match &self.children {
            Some(children) if index <= children.0.right_bound => children.0.leaf(index),
            Some(children) => children.1.leaf(index),
            None => &self.value,
        }
    }

    fn replace<F: Fn(&T, &T) -> T>(&mut self, index: usize, item: T, function: &F) -> T {
        match &mut self.children {
            Some(children) => {
                let (left, right) = &mut **children;
                let old = if index <= left.right_bound {
                    left.replace(index, item, function)
                } else {
                    right.replace(index, item, function)
                };
                self.value = function(&left.value, &right.value);
                old
            },
            None => mem::replace(&mut self.value, item),
        }
    }
}

impl<T: Clone> Segment<T> {
    fn query<F: Fn(&T, &T) -> T>(&self, start: usize, end: usize, function: &F) -> T {
        if start == self.left_bound && end == self.right_bound {
            return self.value.clone();
        }

        // A leaf always matches exactly, since queries are clamped to the segment being searched.
        let Some(children) = &self.children else {
            return self.value.clone();
        };
        let (left, right) = &**children;

        if end <= left.right_bound {
            left.query(start, end, function)
        } else if start >= right.left_bound {
            right.query(start, end, function)
        } else {
            function(
                &left.query(start, left.right_bound, function),
                &right.query(right.left_bound, end, function),
            )
        }
    }
}

impl<T: Clone, F: Fn(&T, &T) -> T + Clone> Clone for SegmentTree<T, F> {
    fn clone(&self) -> Self {
        SegmentTree {
            root: self.root.clone(),
            function: self.function.clone(),
        }
    }
}

impl<T: Clone> Clone for Segment<T> {
    fn clone(&self) -> Self {
        Segment {
            value: self.value.clone(),
            left_bound: self.left_bound,
            right_bound: self.right_bound,
            children: self.children.clone(),
        }
    }
}

impl<T: Debug, F: Fn(&T, &T) -> T> Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("root", &self.root)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: Debug> Debug for Segment<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Segment");
        debug
            .field("range", &(self.left_bound..=self.right_bound))
            .field("value", &self.value);
        if let Some(children) = &self.children {
            debug.field("left", &children.0).field("right", &children.1);
        }
        debug.finish()
    }
}
