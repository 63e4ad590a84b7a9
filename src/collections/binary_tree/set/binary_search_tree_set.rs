use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::binary_tree::tree::{self, BinarySearchTree};
use crate::collections::traits::Set;

/// A set of ordered values backed by a [`BinarySearchTree`], implementing [`Set`].
///
/// Iteration (and therefore every set operation) yields values in ascending order.
///
/// # Examples
/// ```
/// # use learn_collections::collections::binary_tree::BinarySearchTreeSet;
/// # use learn_collections::collections::traits::Set;
/// let odd: BinarySearchTreeSet<u8> = [1, 3, 5, 7].into_iter().collect();
/// let small: BinarySearchTreeSet<u8> = [1, 2, 3].into_iter().collect();
/// assert!(odd.intersection(&small).copied().eq([1, 3]));
/// assert!(odd.union(&small).copied().eq([1, 3, 5, 7, 2]));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BinarySearchTreeSet<T> {
    tree: BinarySearchTree<T>,
}

impl<T> BinarySearchTreeSet<T> {
    pub const fn new() -> BinarySearchTreeSet<T> {
        BinarySearchTreeSet {
            tree: BinarySearchTree::new(),
        }
    }

    /// Returns the smallest value in the set, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns the largest value in the set, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<T: Ord> Set<T> for BinarySearchTreeSet<T> {
    type Iter<'a> = tree::Iter<'a, T> where T: 'a;

    fn len(&self) -> usize {
        self.tree.len()
    }

    fn insert(&mut self, item: T) -> bool {
        self.tree.insert(item)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.tree.remove(item).is_some()
    }

    fn contains(&self, item: &T) -> bool {
        self.tree.contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.tree.iter()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        BinarySearchTreeSet {
            tree: BinarySearchTree::from_iter(iter),
        }
    }
}

impl<T> IntoIterator for BinarySearchTreeSet<T> {
    type Item = T;

    type IntoIter = tree::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTreeSet<T> {
    type Item = &'a T;

    type IntoIter = tree::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.iter()
    }
}

impl<T> Default for BinarySearchTreeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for BinarySearchTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.tree.iter()).finish()
    }
}

impl<T: Display> Display for BinarySearchTreeSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.tree, f)
    }
}
