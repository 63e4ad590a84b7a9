use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::binary_tree::{Branch, Entries};
use crate::util::error::EmptyCollection;
use crate::util::fmt::DebugRaw;
use crate::util::result::OptionExtension;

const EMPTY: EmptyCollection = EmptyCollection {
    collection: "BinarySearchTree",
};

/// An ordered tree of distinct values. Every value is greater than all values in its left subtree
/// and less than all values in its right subtree.
///
/// Inserting a value that compares equal to one already in the tree leaves the tree untouched.
/// Removing a value with two children promotes its in-order successor into its place.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log2 n` and `n` depending on insertion order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `minimum/maximum` | `O(h)` |
/// | `remove_minimum/maximum` | `O(h)` |
/// | `traverse_*` | `O(n)` |
///
/// # Examples
/// ```
/// # use learn_collections::collections::binary_tree::BinarySearchTree;
/// let mut tree: BinarySearchTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
/// assert!(tree.contains(&4));
/// assert_eq!(tree.remove(&3), Some(3));
/// assert_eq!(tree.minimum(), &1);
/// assert!(tree.iter().copied().eq([1, 4, 5, 8]));
/// ```
pub struct BinarySearchTree<T> {
    pub(crate) root: Branch<T, ()>,
    pub(crate) len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty BinarySearchTree.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns the smallest value in the tree, if there is one.
    pub fn first(&self) -> Option<&T> {
        self.root.first_entry().map(|e| e.0)
    }

    /// Returns the largest value in the tree, if there is one.
    pub fn last(&self) -> Option<&T> {
        self.root.last_entry().map(|e| e.0)
    }

    /// Removes and returns the smallest value in the tree, if there is one.
    pub fn take_first(&mut self) -> Option<T> {
        let node = self.root.take_first_node()?;
        self.len -= 1;
        Some(node.key)
    }

    /// Removes and returns the largest value in the tree, if there is one.
    pub fn take_last(&mut self) -> Option<T> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.key)
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn minimum(&self) -> &T {
        self.first().or_throw(EMPTY)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn maximum(&self) -> &T {
        self.last().or_throw(EMPTY)
    }

    /// Removes and returns the smallest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn remove_minimum(&mut self) -> T {
        self.take_first().or_throw(EMPTY)
    }

    /// Removes and returns the largest value in the tree.
    ///
    /// # Panics
    /// Panics if the tree is empty.
    pub fn remove_maximum(&mut self) -> T {
        self.take_last().or_throw(EMPTY)
    }

    /// Calls `process` on each value, visiting every node before its subtrees.
    pub fn traverse_pre_order(&self, mut process: impl FnMut(&T)) {
        self.root.pre_order(&mut |value: &T, _: &()| process(value));
    }

    /// Calls `process` on each value in ascending order.
    pub fn traverse_in_order(&self, mut process: impl FnMut(&T)) {
        self.root.in_order(&mut |value: &T, _: &()| process(value));
    }

    /// Calls `process` on each value, visiting every node after its subtrees.
    pub fn traverse_post_order(&self, mut process: impl FnMut(&T)) {
        self.root.post_order(&mut |value: &T, _: &()| process(value));
    }

    /// Calls `process` on each value one level at a time, starting at the root.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [5, 3, 8, 1, 4, 9].into_iter().collect();
    /// let mut levels = String::new();
    /// tree.traverse_level_order(|v| levels.push_str(&v.to_string()));
    /// assert_eq!(levels, "538149");
    /// ```
    pub fn traverse_level_order(&self, mut process: impl FnMut(&T)) {
        self.root.level_order(&mut |value: &T, _: &()| process(value));
    }

    /// Returns an iterator over the values of the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(Entries::new(&self.root, self.len))
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `value` into the tree, returning false (and dropping `value`) if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = self.root.insert(value, ()).is_none();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns true if a value equal to `value` is in the tree.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(value).map(|e| e.0)
    }

    /// Removes and returns the stored value equal to `value`, if there is one.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.root.remove_node(value)?;
        self.len -= 1;
        Some(node.key)
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    /// Trees are equal when they hold the same values, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field(
                "nodes",
                &DebugRaw(format!("\n{}\n", self.root.draw(&|value: &T, _: &()| format!("({value:?})")))),
            )
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
