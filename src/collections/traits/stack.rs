/// A last-in, first-out collection.
pub trait Stack<T> {
    /// Returns the number of values on the stack.
    fn len(&self) -> usize;

    /// Returns true if there are no values on the stack.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes a value onto the top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the value on top of the stack, if there is one.
    fn pop(&mut self) -> Option<T>;

    /// Returns a reference to the value on top of the stack, if there is one.
    fn top(&self) -> Option<&T>;
}
