use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::collections::contiguous::DynamicArray;
use crate::collections::linear::LazyQueue;
use crate::collections::traits::Queue;

/// An owned link to a subtree, which may be empty.
#[derive(Clone)]
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

/// A single entry of a tree. Every key in `left` is less than `key`, and every key in `right` is
/// greater.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    pub const fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Takes both children of this node and joins them into a single branch that can replace it.
    ///
    /// With at most one child, that child is spliced in directly. With two, the in-order successor
    /// (the minimum of the right subtree) is detached and adopts both subtrees.
    pub fn unlink(&mut self) -> Branch<K, V> {
        if self.left.is_none() {
            return mem::take(&mut self.right);
        }

        match self.right.take_first_node() {
            Some(mut successor) => {
                successor.left = mem::take(&mut self.left);
                successor.right = mem::take(&mut self.right);
                Branch(Some(successor))
            },
            None => mem::take(&mut self.left),
        }
    }
}

impl<K: Ord, V> Branch<K, V> {
    /// Inserts the entry into this subtree. If the key is already present, its value is replaced
    /// and the old value returned, while the stored key stays as it was.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.0 {
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.insert(key, value),
                Ordering::Greater => node.right.insert(key, value),
                Ordering::Equal => Some(mem::replace(&mut node.value, value)),
            },
            None => {
                self.0 = Some(Box::new(Node::leaf(key, value)));
                None
            },
        }
    }

    /// Returns the value stored for `key`, inserting the result of `default` first if there isn't
    /// one.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        match self.0 {
            None => &mut self.0.insert(Box::new(Node::leaf(key, default()))).value,
            Some(ref mut node) => match key.cmp(&node.key) {
                Ordering::Less => node.left.get_or_insert_with(key, default),
                Ordering::Greater => node.right.get_or_insert_with(key, default),
                Ordering::Equal => &mut node.value,
            },
        }
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_ref()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.get_entry(key),
            Ordering::Greater => node.right.get_entry(key),
            Ordering::Equal => Some(node.tuple()),
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.get_mut(key),
            Ordering::Greater => node.right.get_mut(key),
            Ordering::Equal => Some(&mut node.value),
        }
    }

    /// Detaches the node holding `key` from this subtree, returning it with both children taken.
    pub fn remove_node<Q>(&mut self, key: &Q) -> Option<Box<Node<K, V>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;
        match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.remove_node(key),
            Ordering::Greater => node.right.remove_node(key),
            Ordering::Equal => {
                let mut node = self.0.take()?;
                *self = node.unlink();
                Some(node)
            },
        }
    }
}

impl<K, V> Branch<K, V> {
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let node = self.0.as_ref()?;
        node.left.first_entry().or(Some(node.tuple()))
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let node = self.0.as_ref()?;
        node.right.last_entry().or(Some(node.tuple()))
    }

    /// Detaches the minimum node of this subtree, splicing its right child into its place.
    pub fn take_first_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;
        if node.left.is_some() {
            return node.left.take_first_node();
        }

        let mut node = self.0.take()?;
        *self = mem::take(&mut node.right);
        Some(node)
    }

    /// Detaches the maximum node of this subtree, splicing its left child into its place.
    pub fn take_last_node(&mut self) -> Option<Box<Node<K, V>>> {
        let node = self.0.as_mut()?;
        if node.right.is_some() {
            return node.right.take_last_node();
        }

        let mut node = self.0.take()?;
        *self = mem::take(&mut node.left);
        Some(node)
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + cmp::max(node.left.height(), node.right.height()),
            None => 0,
        }
    }

    pub fn pre_order<F: FnMut(&K, &V)>(&self, process: &mut F) {
        if let Some(node) = &self.0 {
            process(&node.key, &node.value);
            node.left.pre_order(process);
            node.right.pre_order(process);
        }
    }

    pub fn in_order<F: FnMut(&K, &V)>(&self, process: &mut F) {
        if let Some(node) = &self.0 {
            node.left.in_order(process);
            process(&node.key, &node.value);
            node.right.in_order(process);
        }
    }

    pub fn post_order<F: FnMut(&K, &V)>(&self, process: &mut F) {
        if let Some(node) = &self.0 {
            node.left.post_order(process);
            node.right.post_order(process);
            process(&node.key, &node.value);
        }
    }

    /// Visits every node breadth first, top to bottom and left to right.
    pub fn level_order<F: FnMut(&K, &V)>(&self, process: &mut F) {
        let mut queue: LazyQueue<&Node<K, V>> = LazyQueue::new();
        if let Some(root) = &self.0 {
            queue.enqueue(root);
        }

        while let Some(node) = queue.dequeue() {
            if let Some(left) = &node.left.0 {
                queue.enqueue(left);
            }
            if let Some(right) = &node.right.0 {
                queue.enqueue(right);
            }
            process(&node.key, &node.value);
        }
    }

    /// Draws this subtree sideways, with left subtrees above their parent and right subtrees
    /// below.
    pub fn draw<F: Fn(&K, &V) -> String>(&self, label: &F) -> String {
        match &self.0 {
            Some(node) => format!(
                "{}\n{}\n{}",
                node.left
                    .draw(label)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<DynamicArray<_>>()
                    .join("\n"),
                label(&node.key, &node.value),
                node.right
                    .draw(label)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<DynamicArray<_>>()
                    .join("\n"),
            ),
            None => String::from("-"),
        }
    }
}

impl<K, V> Default for Branch<K, V> {
    fn default() -> Self {
        Branch(None)
    }
}

impl<K, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> DerefMut for Branch<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K, V> From<Option<Box<Node<K, V>>>> for Branch<K, V> {
    fn from(value: Option<Box<Node<K, V>>>) -> Self {
        Branch(value)
    }
}
