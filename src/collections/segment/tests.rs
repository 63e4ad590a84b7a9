#![cfg(test)]

use super::*;
use crate::util::error::{EmptyCollection, IndexOutOfBounds, InvalidRange};
use crate::util::panic::assert_panics;

const ITEMS: [i64; 7] = [3, -2, 5, 0, 1, 11, -5];

fn sum_tree() -> SegmentTree<i64, impl Fn(&i64, &i64) -> i64> {
    SegmentTree::new(ITEMS, |a, b| a + b)
}

#[test]
fn test_query_sum() {
    let tree = sum_tree();
    assert_eq!(tree.len(), 7);
    assert_eq!(*tree.total(), 13);
    assert_eq!(tree.query(0, 6), 13, "A query over everything should match the total.");
    for start in 0..ITEMS.len() {
        assert_eq!(tree.query(start, start), ITEMS[start]);
        for end in start..ITEMS.len() {
            assert_eq!(tree.query(start, end), ITEMS[start..=end].iter().sum::<i64>());
        }
    }
}

#[test]
fn test_replace_item() {
    let mut tree = sum_tree();
    assert_eq!(tree.replace_item(2, -5), 5, "Replacing should return the previous item.");
    assert_eq!(tree.query(1, 5), 5);
    assert_eq!(tree.query(3, 6), 7, "Queries that don't span the item should be unchanged.");
    assert_eq!(tree.query(0, 1), 1);
    assert_eq!(tree.get(2), Some(&-5));
    assert_eq!(*tree.total(), 3);
}

#[test]
fn test_non_commutative() {
    let letters = ["s", "e", "g", "m", "e", "n", "t"].map(String::from);
    let tree = SegmentTree::new(letters, |a: &String, b: &String| format!("{a}{b}"));
    assert_eq!(tree.query(0, 6), "segment");
    assert_eq!(tree.query(2, 5), "gmen", "The left operand should always cover lower indices.");
}

#[test]
fn test_single_item() {
    let mut tree = SegmentTree::new([42], |a: &i32, b: &i32| *a.max(b));
    assert_eq!(tree.query(0, 0), 42);
    assert_eq!(tree.replace_item(0, 7), 42);
    assert_eq!(*tree.total(), 7);
    assert_eq!(tree.get(1), None);
}

#[test]
fn test_errors() {
    let empty = SegmentTree::try_new(Vec::<i32>::new(), |a: &i32, b: &i32| a + b);
    assert_eq!(
        empty.err(),
        Some(SegmentError::Empty(EmptyCollection {
            collection: "SegmentTree",
        }))
    );

    let mut tree = sum_tree();
    assert_eq!(
        tree.try_query(4, 2),
        Err(SegmentError::InvalidRange(InvalidRange {
            start: 4,
            end: 2,
            len: 7,
        }))
    );
    assert!(tree.try_query(0, 7).is_err_and(|e| e.is_invalid_range()));
    assert_eq!(
        tree.try_replace_item(7, 0),
        Err(SegmentError::IndexOutOfBounds(IndexOutOfBounds { index: 7, len: 7 }))
    );
    assert_eq!(tree.try_query(0, 6), Ok(13), "A failed update shouldn't change the tree.");
}

#[test]
fn test_contract_violations() {
    assert_panics!(
        { SegmentTree::new(Vec::<i32>::new(), |a: &i32, b: &i32| a + b) },
        "Building a segment tree from nothing should panic."
    );
    let mut tree = sum_tree();
    assert_panics!({ tree.query(5, 7) });
    assert_panics!({ tree.replace_item(9, 1) });
}
