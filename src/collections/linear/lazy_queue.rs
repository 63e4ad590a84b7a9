use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Queue;

/// The number of slots a LazyQueue must hold before it bothers compacting dequeued space.
const COMPACT_MIN_SLOTS: usize = 50;

/// A queue stored in a single [`DynamicArray`], which leaves a gap at the front as values are
/// dequeued and only moves the remaining values down once the gap is a quarter of the storage.
///
/// Compared to removing the first element of an array on every dequeue, this trades a little
/// space for dequeues that are `O(1)` amortized rather than `O(n)`.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(1)`* |
/// | `front` | `O(1)` |
///
/// \* Amortized.
///
/// # Examples
/// ```
/// # use learn_collections::collections::linear::LazyQueue;
/// # use learn_collections::collections::traits::Queue;
/// let mut queue = LazyQueue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.front(), Some(&'b'));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct LazyQueue<T> {
    pub(crate) slots: DynamicArray<Option<T>>,
    pub(crate) head: usize,
}

impl<T> LazyQueue<T> {
    /// Creates a new, empty LazyQueue.
    pub fn new() -> LazyQueue<T> {
        LazyQueue {
            slots: DynamicArray::new(),
            head: 0,
        }
    }

    /// Returns an iterator over the waiting values, from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().skip(self.head).flatten()
    }

    /// Drops the dequeued slots at the front of the storage.
    fn compact(&mut self) {
        let head = mem::replace(&mut self.head, 0);
        self.slots = mem::take(&mut self.slots).into_iter().skip(head).collect();
    }
}

impl<T> Queue<T> for LazyQueue<T> {
    fn len(&self) -> usize {
        self.slots.len() - self.head
    }

    fn enqueue(&mut self, value: T) {
        self.slots.push(Some(value));
    }

    fn dequeue(&mut self) -> Option<T> {
        let value = self.slots.get_mut(self.head)?.take()?;
        self.head += 1;

        if self.head == self.slots.len() {
            // Nothing is waiting, so the storage can be reused from the start.
            self.slots.clear();
            self.head = 0;
        } else if self.slots.len() > COMPACT_MIN_SLOTS && self.head * 4 > self.slots.len() {
            self.compact();
        }

        Some(value)
    }

    fn front(&self) -> Option<&T> {
        self.slots.get(self.head)?.as_ref()
    }
}

impl<T> FromIterator<T> for LazyQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazyQueue {
            slots: iter.into_iter().map(Some).collect(),
            head: 0,
        }
    }
}

impl<T> Default for LazyQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for LazyQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyQueue")
            .field("slots", &self.slots)
            .field("head", &self.head)
            .finish()
    }
}

impl<T: Display> Display for LazyQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: front [")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "] back")
    }
}
