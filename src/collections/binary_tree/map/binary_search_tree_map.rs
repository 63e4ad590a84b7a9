use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, Keys, Values};
use crate::collections::binary_tree::{Branch, Entries};
use crate::util::fmt::DebugRaw;

/// A map from ordered keys to values, stored in an unbalanced binary search tree.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `h`: The height of the tree, between `log2 n` and `n` depending on insertion order.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(h)` |
/// | `get` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last_entry` | `O(h)` |
/// | `iter` | `O(n)` |
///
/// # Examples
/// ```
/// # use learn_collections::collections::binary_tree::BinarySearchTreeMap;
/// let mut map = BinarySearchTreeMap::new();
/// assert_eq!(map.insert("b", 2), None);
/// assert_eq!(map.insert("a", 1), None);
/// assert_eq!(map.insert("b", 3), Some(2));
/// assert_eq!(map.get("b"), Some(&3));
/// assert!(map.keys().copied().eq(["a", "b"]));
/// ```
pub struct BinarySearchTreeMap<K, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K, V> BinarySearchTreeMap<K, V> {
    pub const fn new() -> BinarySearchTreeMap<K, V> {
        BinarySearchTreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry from the map.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns the entry with the smallest key, if there is one.
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key, if there is one.
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    /// Removes and returns the entry with the smallest key, if there is one.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_first_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    /// Removes and returns the entry with the largest key, if there is one.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    /// Returns an iterator over the entries of the map, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(Entries::new(&self.root, self.len))
    }

    /// Returns an iterator over the keys of the map, in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over the values of the map, in ascending key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Ord, V> BinarySearchTreeMap<K, V> {
    /// Associates `value` with `key`, returning the value that it replaced, if any. The stored key
    /// is kept when a value is replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let old = self.root.insert(key, value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    /// Returns a mutable reference to the value for `key`, inserting `default()` first if the key
    /// isn't present.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::binary_tree::BinarySearchTreeMap;
    /// let mut counts = BinarySearchTreeMap::new();
    /// for c in "hello".chars() {
    ///     *counts.get_or_insert_with(c, || 0) += 1;
    /// }
    /// assert_eq!(counts.get(&'l'), Some(&2));
    /// assert_eq!(counts.len(), 4);
    /// ```
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        let mut inserted = false;
        let value = self.root.get_or_insert_with(key, || {
            inserted = true;
            default()
        });
        if inserted {
            self.len += 1;
        }
        value
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.root.remove_node(key)?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_entry(key).is_some()
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinarySearchTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BinarySearchTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Default for BinarySearchTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for BinarySearchTreeMap<K, V> {
    fn clone(&self) -> Self {
        BinarySearchTreeMap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: Debug, V: Debug> Debug for BinarySearchTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTreeMap")
            .field(
                "nodes",
                &DebugRaw(format!("\n{}\n", self.root.draw(&|k: &K, v: &V| format!("({k:?}: {v:?})")))),
            )
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for BinarySearchTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
