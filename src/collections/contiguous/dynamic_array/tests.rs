#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_and_shrink() {
    let mut arr = DynamicArray::new();
    let mut caps = DynamicArray::new();
    for i in 0..5 {
        arr.push(i);
        caps.push(arr.cap());
    }
    assert_eq!(
        *caps,
        [1, 2, 4, 4, 8],
        "Capacity should start at one and double whenever the array is full."
    );

    let mut caps = DynamicArray::new();
    while arr.pop().is_some() {
        caps.push(arr.cap());
    }
    assert_eq!(
        *caps,
        [8, 8, 4, 2, 1],
        "Capacity should halve when a quarter full, but never drop to zero."
    );
    assert!(arr.is_empty());
}

#[test]
fn test_insert_and_remove() {
    let mut arr = DynamicArray::from([1, 2, 3]);
    arr.insert(0, 0);
    arr.insert(4, 4);
    arr.insert(2, 100);
    assert_eq!(*arr, [0, 1, 100, 2, 3, 4], "Inserts should shift later elements right.");

    assert_eq!(arr.remove(2), 100);
    assert_eq!(arr.remove_first(), 0);
    assert_eq!(arr.remove_last(), 4);
    assert_eq!(*arr, [1, 2, 3], "Removals should shift later elements left.");

    assert_eq!(arr.replace(1, 20), 2);
    arr[2] = 30;
    assert_eq!(*arr, [1, 20, 30], "Replaced values should read back.");

    assert_eq!(arr.position(&30), Some(2));
    assert_eq!(arr.position(&2), None);
    assert!(arr.contains(&20));
}

#[test]
fn test_contract_violations() {
    assert_panics!({
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr.insert(4, 4);
    }, "Inserting past len should panic.");
    assert_panics!({
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr.remove(3);
    }, "Removing at len should panic.");
    assert_panics!({
        let arr = DynamicArray::from([1, 2, 3]);
        let _value = arr[3];
    }, "Reading at len should panic.");
    assert_panics!({
        let mut arr = DynamicArray::<u8>::new();
        arr.remove_first();
    }, "Removing from an empty array should panic.");
    assert_panics!({
        let mut arr = DynamicArray::from([1, 2, 3]);
        arr.resize(2);
    }, "Shrinking below len should panic.");
}

#[test]
fn test_resize_preserves_order() {
    let mut arr: DynamicArray<_> = (0..10).collect();
    arr.resize(32);
    assert_eq!(arr.cap(), 32);
    assert!(arr.iter().copied().eq(0..10), "Growing should keep all elements in order.");

    arr.resize(10);
    assert_eq!(arr.cap(), 10);
    assert!(arr.iter().copied().eq(0..10), "Shrinking should keep all elements in order.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr.remove(4));
    assert_eq!(counter.take(), 1, "A removed element should be handed back, not dropped twice.");

    drop(arr);
    assert_eq!(counter.take(), 9, "All remaining elements should have been dropped.");

    let mut arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    arr.clear();
    assert_eq!(counter.take(), 10, "Clearing should drop every element.");
    assert_eq!(arr.cap(), 10, "Clearing should leave the capacity alone.");
}

#[test]
fn test_iterators() {
    let mut arr: DynamicArray<usize> = (0..5).collect();
    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr: DynamicArray<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = arr.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(counter.take(), 10, "Dropping an owned iterator should drop all elements.");
}

#[test]
fn test_equality_hash_and_format() {
    let arr = DynamicArray::from([1_u8, 2, 3]);
    assert_eq!(arr, (1..=3).collect(), "Construction method shouldn't matter for equality.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([1_u8, 2, 3]),
        "Hashes should agree with the borrowed slice."
    );

    assert_eq!(arr.to_string(), "[1, 2, 3]");
    assert_eq!(DynamicArray::<u8>::new().to_string(), "[]");
}
