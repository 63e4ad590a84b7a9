use std::iter::{Chain, FusedIterator};

/// A collection of distinct values, along with the usual set algebra as borrowed iterators.
pub trait Set<T> {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of values in the set.
    fn len(&self) -> usize;

    /// Returns true if the set contains no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `item` to the set, returning false if it was already present.
    fn insert(&mut self, item: T) -> bool;

    /// Removes `item` from the set, returning false if it wasn't present.
    fn remove(&mut self, item: &T) -> bool;

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all values in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T>
    where
        Self: Sized,
        T: 'a,
    {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T>
    where
        Self: Sized,
        T: 'a,
    {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T>
    where
        Self: Sized,
        T: 'a,
    {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T>
    where
        Self: Sized,
        T: 'a,
    {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        other.iter().all(|item| self.contains(item))
    }
}

pub struct Difference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Difference<'a, S, T> {}

pub struct SymmetricDifference<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for SymmetricDifference<'a, S, T> {}

pub struct Intersection<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Intersection<'a, S, T> {}

pub struct Union<'a, S: Set<T> + 'a, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T> + 'a, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T> + 'a, T: 'a> FusedIterator for Union<'a, S, T> {}
