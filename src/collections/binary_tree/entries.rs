use std::iter::FusedIterator;

use super::{Branch, Node};
use crate::collections::contiguous::DynamicArray;

/// A borrowed, in-order iterator over the entries of a tree.
///
/// The stack holds every node whose left subtree has been (or is being) visited but which hasn't
/// been yielded itself yet, so it never grows beyond the height of the tree.
pub(crate) struct Entries<'a, K, V> {
    stack: DynamicArray<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Entries<'a, K, V> {
    pub fn new(root: &'a Branch<K, V>, len: usize) -> Entries<'a, K, V> {
        let mut entries = Entries {
            stack: DynamicArray::new(),
            len,
        };
        entries.descend_left(root);
        entries
    }

    fn descend_left(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = &branch.0 {
            self.stack.push(&**node);
            branch = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

/// An owned iterator over the entries of a tree, which detaches the first (or last) node on every
/// step.
pub(crate) struct IntoEntries<K, V> {
    root: Branch<K, V>,
    len: usize,
}

impl<K, V> IntoEntries<K, V> {
    pub const fn new(root: Branch<K, V>, len: usize) -> IntoEntries<K, V> {
        IntoEntries { root, len }
    }
}

impl<K, V> Iterator for IntoEntries<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // Each step walks down the left spine again, costing the height of the tree. A stack of
        // detached nodes would avoid it, at the cost of juggling partially owned subtrees.
        let node = self.root.take_first_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> DoubleEndedIterator for IntoEntries<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.root.take_last_node()?;
        self.len -= 1;
        Some(node.into_tuple())
    }
}

impl<K, V> ExactSizeIterator for IntoEntries<K, V> {}

impl<K, V> FusedIterator for IntoEntries<K, V> {}
