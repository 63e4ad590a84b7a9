use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Stack;

/// A stack whose top is the end of a [`DynamicArray`], so pushes and pops are amortized `O(1)`.
///
/// # Examples
/// ```
/// # use learn_collections::collections::linear::ArrayStack;
/// # use learn_collections::collections::traits::Stack;
/// let mut stack: ArrayStack<_> = [1, 2].into_iter().collect();
/// stack.push(3);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.top(), Some(&2));
/// ```
pub struct ArrayStack<T> {
    pub(crate) items: DynamicArray<T>,
}

impl<T> ArrayStack<T> {
    /// Creates a new, empty ArrayStack.
    pub fn new() -> ArrayStack<T> {
        ArrayStack {
            items: DynamicArray::new(),
        }
    }

    /// Returns the values on the stack as a slice, from the bottom up.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, value: T) {
        self.items.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn top(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayStack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Display> Display for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stack: {} top", self.items)
    }
}
