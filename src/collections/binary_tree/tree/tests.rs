#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

//         50
//      /      \
//    30        70
//   /  \      /  \
// 20    40  60    80
//             \
//              65
fn sample() -> BinarySearchTree<u32> {
    [50, 30, 70, 20, 40, 60, 80, 65].into_iter().collect()
}

fn collect(traverse: impl FnOnce(&mut dyn FnMut(&u32))) -> DynamicArray<u32> {
    let mut out = DynamicArray::new();
    traverse(&mut |v| out.push(*v));
    out
}

#[test]
fn test_insert_and_contains() {
    let mut tree = sample();
    assert_eq!(tree.len(), 8);
    assert!(!tree.insert(60), "Inserting a duplicate should be rejected.");
    assert_eq!(tree.len(), 8, "A duplicate insert shouldn't change the length.");

    for v in [50, 30, 70, 20, 40, 60, 80, 65] {
        assert!(tree.contains(&v), "Every inserted value should be found.");
    }
    for v in [0, 10, 45, 66, 100] {
        assert!(!tree.contains(&v), "Values never inserted shouldn't be found.");
    }
    assert_eq!(tree.height(), 4);
}

#[test]
fn test_traversals() {
    let tree = sample();
    assert_eq!(
        *collect(|p| tree.traverse_pre_order(p)),
        [50, 30, 20, 40, 70, 60, 65, 80]
    );
    assert_eq!(
        *collect(|p| tree.traverse_in_order(p)),
        [20, 30, 40, 50, 60, 65, 70, 80],
        "In-order traversal should be sorted."
    );
    assert_eq!(
        *collect(|p| tree.traverse_post_order(p)),
        [20, 40, 30, 65, 60, 80, 70, 50]
    );
    assert_eq!(
        *collect(|p| tree.traverse_level_order(p)),
        [50, 30, 70, 20, 40, 60, 80, 65]
    );
    assert!(
        tree.iter().eq(collect(|p| tree.traverse_in_order(p)).iter()),
        "Iteration should match in-order traversal."
    );
}

#[test]
fn test_remove_cases() {
    let mut tree = sample();

    assert_eq!(tree.remove(&20), Some(20), "Removing a leaf should work.");
    assert_eq!(tree.remove(&60), Some(60), "Removing a node with only a right child should work.");
    assert_eq!(
        *collect(|p| tree.traverse_pre_order(p)),
        [50, 30, 40, 70, 65, 80],
        "The right child should take the place of its removed parent."
    );

    assert_eq!(tree.remove(&50), Some(50), "Removing the root with two children should work.");
    assert_eq!(
        *collect(|p| tree.traverse_pre_order(p)),
        [65, 30, 40, 70, 80],
        "The in-order successor should have been promoted to the root."
    );

    assert_eq!(tree.remove(&50), None, "Removing a missing value should return None.");
    assert_eq!(tree.len(), 5);
    assert!(!tree.contains(&50));
    for v in [30, 40, 65, 70, 80] {
        assert!(tree.contains(&v), "Other values should survive removals.");
    }

    let mut tree: BinarySearchTree<u32> = [50, 30, 20, 10].into_iter().collect();
    assert_eq!(tree.remove(&30), Some(30), "Removing a node with only a left child should work.");
    assert_eq!(
        *collect(|p| tree.traverse_pre_order(p)),
        [50, 20, 10],
        "The left child should take the place of its removed parent."
    );
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_minimum_and_maximum() {
    let mut tree = sample();
    assert_eq!(tree.minimum(), &20);
    assert_eq!(tree.maximum(), &80);
    assert_eq!(tree.remove_minimum(), 20);
    assert_eq!(tree.remove_maximum(), 80);
    assert_eq!(tree.minimum(), &30);
    assert_eq!(tree.maximum(), &70);
    assert_eq!(tree.len(), 6);

    let mut empty = BinarySearchTree::<u32>::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.take_last(), None);
    assert_panics!({ BinarySearchTree::<u32>::new().minimum(); }, "Minimum of nothing should panic.");
    assert_panics!({ BinarySearchTree::<u32>::new().remove_maximum(); });
}

#[test]
fn test_drain_in_order() {
    let tree = sample();
    assert!(tree.clone().into_iter().eq([20, 30, 40, 50, 60, 65, 70, 80]));
    assert!(tree.into_iter().rev().eq([80, 70, 65, 60, 50, 40, 30, 20]));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut tree = BinarySearchTree::new();
    for i in 0..10 {
        tree.insert(Keyed(i, counter.clone()));
    }
    tree.remove(&Keyed(3, counter.clone()));
    assert_eq!(counter.take(), 2, "The removed value and the probe should both be dropped.");

    drop(tree);
    assert_eq!(counter.take(), 9, "Dropping the tree should drop every value once.");
}

#[test]
fn test_format() {
    let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    assert_eq!(tree.to_string(), "{1, 2, 3}");
    let words: BinarySearchTree<_> = ["pear", "apple"].into_iter().collect();
    assert_eq!(words.to_string(), "{apple, pear}", "Display shouldn't quote its values.");
    assert_eq!(BinarySearchTree::<u8>::new().to_string(), "{}");
    assert_eq!(
        tree.root.draw(&|v: &i32, _: &()| v.to_string()),
        "┌    ┌    -\n┌    1\n┌    └    -\n2\n└    ┌    -\n└    3\n└    └    -"
    );
}

/// Orders by the number alone, carrying a drop counter along.
struct Keyed(u32, CountedDrop);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
