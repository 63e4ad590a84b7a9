//! Linear collections built on [`DynamicArray`](super::contiguous::DynamicArray): a queue with
//! amortized `O(1)` dequeues and a stack.

mod array_stack;
mod lazy_queue;

pub use array_stack::*;
pub use lazy_queue::*;
