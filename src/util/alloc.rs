#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value that records its own drops, and those of all its clones, in one shared count.
///
/// Collections are handed clones while the test keeps one for itself, so the count shows how
/// many elements the collection dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(start: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(start)))
    }

    /// Returns the drops counted since the last call, resetting the count to zero.
    pub fn take(&self) -> usize {
        self.0.replace(0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
