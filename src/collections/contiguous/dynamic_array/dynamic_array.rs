use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::util::error::{CapacityUnderflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::{OptionExtension, ResultExtension};

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, which owns a fixed block of storage and replaces it
/// whenever it runs out of room (or is left mostly empty).
///
/// Capacity doubles when an insertion finds the array full, and halves when a removal leaves it a
/// quarter full. The gap between those two thresholds stops a sequence of alternating pushes and
/// pops at a boundary from reallocating every time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DynamicArray.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `index` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `resize` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized. A push into a full array or a pop that leaves it a quarter full reallocates,
/// which takes `O(n)`.
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates a new DynamicArray with length and capacity 0. Memory will be allocated when the
    /// first element is added.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let arr: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 0);
    /// ```
    pub fn new() -> DynamicArray<T> {
        DynamicArray::with_cap(0)
    }

    /// Creates a new DynamicArray with capacity exactly equal to the provided value, allowing
    /// values to be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<u8> = DynamicArray::with_cap(5);
    /// assert_eq!(arr.cap(), 5);
    /// arr.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> DynamicArray<T> {
        DynamicArray {
            buf: Box::new_uninit_slice(cap),
            len: 0,
        }
    }

    /// Returns the number of elements in the DynamicArray.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DynamicArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements that the DynamicArray can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::from([0, 1, 2]);
    /// arr.insert(1, 100);
    /// arr.insert(1, 200);
    /// arr.insert(5, 300);
    /// assert_eq!(&*arr, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len == self.cap() {
            self.grow();
        }

        // Walk the empty slot at len down to index, from the high end so nothing is overwritten.
        for i in (index..self.len).rev() {
            self.buf.swap(i, i + 1);
        }

        self.buf[index] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Pushes the provided value onto the end of the DynamicArray, increasing the capacity if
    /// required.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let mut arr = DynamicArray::<u8>::new();
    /// for i in 0..=5 {
    ///     arr.push(i);
    /// }
    /// assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(arr.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap
    /// and shrinking the capacity if the DynamicArray is left a quarter full.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = "Hello world!".chars().collect();
    /// assert_eq!(arr.remove(1), 'e');
    /// assert_eq!(arr.remove(4), ' ');
    /// assert_eq!(arr, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        let value = mem::replace(&mut self.buf[index], MaybeUninit::uninit());
        // Walk the now empty slot up to the end.
        for i in index + 1..self.len {
            self.buf.swap(i - 1, i);
        }
        self.len -= 1;

        if self.len == self.cap() / 4 && self.cap() / 2 != 0 {
            self.resize(self.cap() / 2);
        }

        // SAFETY: index was less than len, so the value taken from it was initialized.
        unsafe { value.assume_init() }
    }

    /// Pops the last value off the end of the DynamicArray, returning an owned value if the
    /// DynamicArray isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::contiguous::DynamicArray;
    /// let mut arr: DynamicArray<_> = (0..5).collect();
    /// for i in (0..arr.len()).rev() {
    ///     assert_eq!(arr.pop(), Some(i));
    /// }
    /// assert_eq!(arr.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(self.len - 1))
        }
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    /// Panics if the DynamicArray is empty.
    pub fn remove_first(&mut self) -> T {
        if self.is_empty() {
            Err(EmptyCollection { collection: "DynamicArray" }).throw()
        }
        self.remove(0)
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    /// Panics if the DynamicArray is empty.
    pub fn remove_last(&mut self) -> T {
        self.pop().or_throw(EmptyCollection { collection: "DynamicArray" })
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        mem::replace(&mut self[index], new_value)
    }

    /// Returns the index of the first element equal to `value`, if there is one.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Drops every element, leaving the capacity as it is.
    pub fn clear(&mut self) {
        // Zero len first, so a panicking drop can't lead to a double drop.
        let len = mem::replace(&mut self.len, 0);
        for slot in &mut self.buf[..len] {
            // SAFETY: All slots below the old len are initialized and dropped exactly once here.
            unsafe { slot.assume_init_drop(); }
        }
    }

    /// Moves all elements into a new block of storage with exactly `new_cap` slots.
    ///
    /// # Panics
    /// Panics if `new_cap` is less than the number of elements.
    pub fn resize(&mut self, new_cap: usize) {
        if new_cap < self.len {
            Err(CapacityUnderflow {
                cap: new_cap,
                len: self.len,
            }).throw()
        }

        let mut buf = Box::new_uninit_slice(new_cap);
        buf[..self.len].swap_with_slice(&mut self.buf[..self.len]);
        // The old block now only holds uninitialized slots, which don't need dropping.
        self.buf = buf;
    }

    /// Grows the storage so that it can take at least one more element.
    pub(crate) fn grow(&mut self) {
        self.resize(cmp::max(MIN_CAP, self.cap().saturating_mul(GROWTH_FACTOR)));
    }

    /// Checks that the provided index refers to an element.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    #[track_caller]
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.check_index(index);
        &self.deref()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.check_index(index);
        &mut self.deref_mut()[index]
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = DynamicArray::with_cap(iter.size_hint().0);

        for item in iter {
            arr.push(item);
        }

        arr
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
        // Implicitly drop self.buf, which now only contains uninitialized values.
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The borrow checker enforces that self isn't mutated while the slice lives.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The first len slots are initialized and MaybeUninit<T> has the same layout as T.
        // The borrow checker enforces that self isn't accessed while the slice lives.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_cap(self.cap());

        for value in self.iter() {
            arr.push(value.clone());
        }

        arr
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
