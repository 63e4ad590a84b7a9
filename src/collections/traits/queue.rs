/// A first-in, first-out collection. Values leave in the order that they were enqueued, except
/// for queues like [`PriorityQueue`](crate::collections::heap::PriorityQueue) which define their
/// own notion of "first".
pub trait Queue<T> {
    /// Returns the number of values waiting in the queue.
    fn len(&self) -> usize;

    /// Returns true if there are no values waiting in the queue.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a value to the back of the queue.
    fn enqueue(&mut self, value: T);

    /// Removes and returns the value at the front of the queue, if there is one.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns a reference to the value at the front of the queue, if there is one.
    fn front(&self) -> Option<&T>;
}
