use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use crate::collections::contiguous::DynamicArray;

/// A collection of disjoint sets, supporting merging two sets and asking which set an element
/// belongs to.
///
/// Each element is given an index when it's added, and starts out alone in a set. Sets are trees
/// of indices, stored as an array of parent indices, where the root of each tree identifies the
/// set. Two optimizations keep these trees shallow:
/// - Finding a set compresses the path it walks, pointing every index on it straight at the root.
///   This is why [`set_of`](UnionFind::set_of) takes `&mut self`.
/// - Merging attaches the root of the smaller set under the root of the larger one.
///
/// Together these give an amortized cost of `O(α(n))` per operation, where `α` is the inverse
/// Ackermann function, which is effectively constant.
///
/// Set identifiers are the index of the root element, so they can change when sets are merged.
///
/// # Examples
/// ```
/// # use learn_collections::collections::union_find::UnionFind;
/// let mut friends = UnionFind::new();
/// for name in ["ann", "bob", "cat", "dan"] {
///     friends.add_set_with(name);
/// }
/// assert!(friends.union_sets_containing("ann", "bob"));
/// assert!(friends.union_sets_containing("bob", "cat"));
/// assert!(friends.in_same_set("ann", "cat"));
/// assert!(!friends.in_same_set("ann", "dan"));
/// assert_eq!(friends.set_count(), 2);
/// ```
pub struct UnionFind<T> {
    pub(crate) index: HashMap<T, usize>,
    pub(crate) parent: DynamicArray<usize>,
    pub(crate) size: DynamicArray<usize>,
    pub(crate) set_count: usize,
}

impl<T> UnionFind<T> {
    pub fn new() -> UnionFind<T> {
        UnionFind {
            index: HashMap::new(),
            parent: DynamicArray::new(),
            size: DynamicArray::new(),
            set_count: 0,
        }
    }

    /// Returns the number of elements that have been added.
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of disjoint sets.
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the root of the tree containing `index`, compressing the path to it.
    fn set_by_index(&mut self, index: usize) -> usize {
        let parent = self.parent[index];
        if parent == index {
            return index;
        }

        let root = self.set_by_index(parent);
        self.parent.replace(index, root);
        root
    }
}

impl<T: Hash + Eq> UnionFind<T> {
    /// Adds `element` in a new set of its own, returning the identifier of its set. If the element
    /// has already been added, nothing changes and the identifier of its current set is returned.
    pub fn add_set_with(&mut self, element: T) -> usize {
        if let Some(&index) = self.index.get(&element) {
            return self.set_by_index(index);
        }

        let index = self.parent.len();
        self.index.insert(element, index);
        self.parent.push(index);
        self.size.push(1);
        self.set_count += 1;
        index
    }

    /// Returns the identifier of the set containing `element`, or `None` if it hasn't been added.
    pub fn set_of<Q>(&mut self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.index.get(element)?;
        Some(self.set_by_index(index))
    }

    /// Returns the number of elements in the set containing `element`, or `None` if it hasn't been
    /// added.
    pub fn size_of_set<Q>(&mut self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let set = self.set_of(element)?;
        Some(self.size[set])
    }

    /// Merges the sets containing `first` and `second`. Returns true if two distinct sets were
    /// merged, or false if the elements were already in the same set or either hasn't been added.
    pub fn union_sets_containing<Q>(&mut self, first: &Q, second: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (Some(first), Some(second)) = (self.set_of(first), self.set_of(second)) else {
            return false;
        };
        if first == second {
            return false;
        }

        let (child, root) = if self.size[first] < self.size[second] {
            (first, second)
        } else {
            (second, first)
        };
        self.parent.replace(child, root);
        let merged = self.size[root] + self.size[child];
        self.size.replace(root, merged);
        self.set_count -= 1;
        true
    }

    /// Returns true if `first` and `second` have both been added and are in the same set.
    pub fn in_same_set<Q>(&mut self, first: &Q, second: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.set_of(first), self.set_of(second)) {
            (Some(first), Some(second)) => first == second,
            _ => false,
        }
    }
}

impl<T: Hash + Eq> Extend<T> for UnionFind<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_set_with(element);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut union_find = UnionFind::new();
        union_find.extend(iter);
        union_find
    }
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for UnionFind<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionFind")
            .field("parent", &&*self.parent)
            .field("size", &&*self.size)
            .field("set_count", &self.set_count)
            .finish_non_exhaustive()
    }
}
