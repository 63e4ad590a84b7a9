use std::fmt::{self, Debug, Formatter};

use super::{Heap, OrderFn};
use crate::collections::traits::Queue;

/// A queue which always dequeues the value that its ordering puts first, backed by a [`Heap`].
///
/// Both enqueuing and dequeuing take `O(log n)` time.
///
/// # Examples
/// ```
/// # use learn_collections::collections::heap::PriorityQueue;
/// # use learn_collections::collections::traits::Queue;
/// let mut jobs = PriorityQueue::new(|a: &(u8, &str), b: &(u8, &str)| a.0 > b.0);
/// jobs.enqueue((1, "sweep"));
/// jobs.enqueue((5, "deploy"));
/// jobs.enqueue((3, "review"));
/// assert_eq!(jobs.dequeue(), Some((5, "deploy")));
/// assert_eq!(jobs.front(), Some(&(3, "review")));
/// ```
pub struct PriorityQueue<T, F: Fn(&T, &T) -> bool> {
    heap: Heap<T, F>,
}

impl<T: Ord> PriorityQueue<T, OrderFn<T>> {
    /// Creates an empty queue which dequeues its smallest value first.
    pub fn min_first() -> PriorityQueue<T, OrderFn<T>> {
        PriorityQueue {
            heap: Heap::min_heap(),
        }
    }

    /// Creates an empty queue which dequeues its largest value first.
    pub fn max_first() -> PriorityQueue<T, OrderFn<T>> {
        PriorityQueue {
            heap: Heap::max_heap(),
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> PriorityQueue<T, F> {
    /// Creates an empty queue, where `order(a, b)` is true when `a` should be dequeued before `b`.
    pub fn new(order: F) -> PriorityQueue<T, F> {
        PriorityQueue {
            heap: Heap::new(order),
        }
    }

    /// Creates a queue holding every value of `iter`, in `O(n)` time.
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, order: F) -> PriorityQueue<T, F> {
        PriorityQueue {
            heap: Heap::from_iter_with(iter, order),
        }
    }

    /// Consumes the queue, returning the heap that backs it.
    pub fn into_heap(self) -> Heap<T, F> {
        self.heap
    }
}

impl<T, F: Fn(&T, &T) -> bool> Queue<T> for PriorityQueue<T, F> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn enqueue(&mut self, value: T) {
        self.heap.insert(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    fn front(&self) -> Option<&T> {
        self.heap.peek()
    }
}

impl<T, F: Fn(&T, &T) -> bool> From<Heap<T, F>> for PriorityQueue<T, F> {
    fn from(heap: Heap<T, F>) -> Self {
        PriorityQueue { heap }
    }
}

impl<T: Ord> Default for PriorityQueue<T, OrderFn<T>> {
    fn default() -> Self {
        Self::min_first()
    }
}

impl<T: Debug, F: Fn(&T, &T) -> bool> Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
