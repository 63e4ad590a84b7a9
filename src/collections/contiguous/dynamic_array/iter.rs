use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::slice;

use super::DynamicArray;

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave self empty, so that its drop has nothing left to do.
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::take(&mut self.buf),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`DynamicArray`]. Elements in the range
/// `start..end` are initialized and yet to be yielded.
pub struct IntoIter<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        let value = mem::replace(&mut self.buf[self.start], MaybeUninit::uninit());
        self.start += 1;
        // SAFETY: The slot was within start..end, so it was initialized and hadn't been taken.
        Some(unsafe { value.assume_init() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        let value = mem::replace(&mut self.buf[self.end], MaybeUninit::uninit());
        // SAFETY: The slot was within start..end, so it was initialized and hadn't been taken.
        Some(unsafe { value.assume_init() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: Slots within start..end are initialized and haven't been yielded.
            unsafe { slot.assume_init_drop(); }
        }
    }
}
