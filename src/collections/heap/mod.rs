//! Binary heaps ordered by a caller-supplied predicate, and a priority queue built on them.
//!
//! A [`Heap`] is a complete binary tree stored level by level in a
//! [`DynamicArray`](super::contiguous::DynamicArray): the children of index `i` live at `2i + 1`
//! and `2i + 2`, and its parent at `(i - 1) / 2`. The predicate `order(a, b)` returns true when
//! `a` should leave the heap before `b`, so the same type serves as a min-heap, a max-heap or any
//! other strict weak ordering.

mod heap;
mod priority_queue;
mod tests;

pub use heap::*;
pub use priority_queue::*;
