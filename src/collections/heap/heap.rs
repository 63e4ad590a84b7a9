use std::fmt::{self, Debug, Formatter};

use crate::collections::contiguous::DynamicArray;

/// The ordering of a heap over `T` built from a plain function, as used by [`Heap::min_heap`] and
/// [`Heap::max_heap`].
pub type OrderFn<T> = fn(&T, &T) -> bool;

/// A binary heap, ordered by the predicate `F`.
///
/// The value for which `order` holds against every other value is always at the front. The
/// predicate has to be a strict weak ordering: `order(a, a)` is false and the relation is
/// transitive. Values which are ordered equally leave the heap in no particular order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `peek` | `O(1)` |
/// | `insert` | `O(log n)`*, `O(n)` |
/// | `remove` | `O(log n)`*, `O(n)` |
/// | `replace` | `O(log n)` |
/// | `from_iter_with` | `O(n)` |
/// | `into_sorted` | `O(n log n)` |
///
/// The worst cases come from the backing [`DynamicArray`] resizing.
///
/// # Examples
/// ```
/// # use learn_collections::collections::heap::Heap;
/// let mut heap = Heap::new(|a: &&str, b: &&str| a.len() > b.len());
/// heap.insert("heap");
/// heap.insert("priority");
/// heap.insert("queue");
/// assert_eq!(heap.peek(), Some(&"priority"));
/// assert_eq!(heap.remove(), Some("priority"));
/// assert_eq!(heap.remove(), Some("queue"));
/// ```
pub struct Heap<T, F: Fn(&T, &T) -> bool> {
    pub(crate) nodes: DynamicArray<T>,
    pub(crate) order: F,
}

impl<T: Ord> Heap<T, OrderFn<T>> {
    /// Creates an empty heap which yields its smallest value first.
    pub fn min_heap() -> Heap<T, OrderFn<T>> {
        Self::new(T::lt)
    }

    /// Creates an empty heap which yields its largest value first.
    pub fn max_heap() -> Heap<T, OrderFn<T>> {
        Self::new(T::gt)
    }
}

impl<T, F: Fn(&T, &T) -> bool> Heap<T, F> {
    /// Creates an empty heap, ordered by `order`.
    pub fn new(order: F) -> Heap<T, F> {
        Heap {
            nodes: DynamicArray::new(),
            order,
        }
    }

    /// Creates a heap containing every value of `iter`.
    ///
    /// Rather than inserting values one at a time, the values are collected as they come and then
    /// every internal node is shifted down, starting from the last one. This takes `O(n)` rather
    /// than `O(n log n)`.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::heap::Heap;
    /// let heap = Heap::from_iter_with([3, 9, 1, 4], |a, b| a > b);
    /// assert_eq!(heap.peek(), Some(&9));
    /// assert_eq!(heap.len(), 4);
    /// ```
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, order: F) -> Heap<T, F> {
        let mut heap = Heap {
            nodes: iter.into_iter().collect(),
            order,
        };
        let len = heap.len();
        for index in (0..len / 2).rev() {
            heap.shift_down(index, len);
        }
        heap
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the value at the front of the heap without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Returns the nodes of the heap in storage order, which is level by level.
    pub fn as_slice(&self) -> &[T] {
        &self.nodes
    }

    pub fn insert(&mut self, value: T) {
        self.nodes.push(value);
        self.shift_up(self.len() - 1);
    }

    /// Removes and returns the value at the front of the heap, if there is one.
    pub fn remove(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last = self.len() - 1;
        self.nodes.swap(0, last);
        let value = self.nodes.pop();
        self.shift_down(0, self.len());
        value
    }

    /// Replaces the value at the front of the heap with `value`, returning the previous front.
    /// This costs a single pass down the heap, rather than the two that [`remove`](Self::remove)
    /// followed by [`insert`](Self::insert) would.
    ///
    /// An empty heap has no front to replace, so it is left empty and `None` is returned.
    pub fn replace(&mut self, value: T) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let old = self.nodes.replace(0, value);
        self.shift_down(0, self.len());
        Some(old)
    }

    /// Removes and returns the node at `index` in storage order, if it exists.
    ///
    /// The node is swapped with the last one, which then moves whichever way restores the heap
    /// before the target is popped off the end.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        let last = self.len() - 1;
        if index != last {
            self.nodes.swap(index, last);
            self.shift_down(index, last);
            self.shift_up(index);
        }
        self.nodes.pop()
    }

    /// Drains the heap into a [`DynamicArray`], in the order the values would have been removed.
    pub fn into_sorted(mut self) -> DynamicArray<T> {
        let mut sorted = DynamicArray::with_cap(self.len());
        while let Some(value) = self.remove() {
            sorted.push(value);
        }
        sorted
    }

    fn shift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !(self.order)(&self.nodes[index], &self.nodes[parent]) {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the node at `index` down until neither of its children (below `until`) should be
    /// ordered ahead of it.
    fn shift_down(&mut self, mut index: usize, until: usize) {
        loop {
            let (left, right) = (left(index), right(index));

            let mut first = index;
            if left < until && (self.order)(&self.nodes[left], &self.nodes[first]) {
                first = left;
            }
            if right < until && (self.order)(&self.nodes[right], &self.nodes[first]) {
                first = right;
            }
            if first == index {
                return;
            }

            self.nodes.swap(index, first);
            index = first;
        }
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

const fn left(index: usize) -> usize {
    2 * index + 1
}

const fn right(index: usize) -> usize {
    2 * index + 2
}

impl<T: Ord> Default for Heap<T, OrderFn<T>> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T: Ord> FromIterator<T> for Heap<T, OrderFn<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, T::lt)
    }
}

impl<T, F: Fn(&T, &T) -> bool> Extend<T> for Heap<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Clone, F: Fn(&T, &T) -> bool + Clone> Clone for Heap<T, F> {
    fn clone(&self) -> Self {
        Heap {
            nodes: self.nodes.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: Debug, F: Fn(&T, &T) -> bool> Debug for Heap<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("nodes", &&*self.nodes)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
