#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Queue;
use crate::util::alloc::CountedDrop;

/// Checks that no node should be ordered ahead of its parent.
fn assert_heap<T, F: Fn(&T, &T) -> bool>(heap: &Heap<T, F>) {
    let nodes = heap.as_slice();
    for index in 1..nodes.len() {
        assert!(
            !(heap.order)(&nodes[index], &nodes[(index - 1) / 2]),
            "Node {index} is ordered ahead of its parent."
        );
    }
}

#[test]
fn test_insert_and_peek() {
    let mut heap = Heap::min_heap();
    assert_eq!(heap.peek(), None);
    for value in [7, 3, 9, 1, 8, 2] {
        heap.insert(value);
        assert_heap(&heap);
    }
    assert_eq!(heap.len(), 6);
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_remove_order() {
    let mut heap = Heap::max_heap();
    heap.extend([4, 10, 3, 5, 1, 10]);
    let mut out = DynamicArray::new();
    while let Some(value) = heap.remove() {
        assert_heap(&heap);
        out.push(value);
    }
    assert_eq!(&*out, &[10, 10, 5, 4, 3, 1]);
    assert!(heap.is_empty());
    assert_eq!(heap.remove(), None, "Removing from an empty heap should return None.");
}

#[test]
fn test_heapify() {
    let heap = Heap::from_iter_with([5, 9, 2, 7, 1, 8, 3, 6], |a: &i32, b: &i32| a < b);
    assert_heap(&heap);
    assert_eq!(heap.len(), 8);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(&*heap.into_sorted(), &[1, 2, 3, 5, 6, 7, 8, 9]);

    let empty = Heap::from_iter_with(Vec::<i32>::new(), |a: &i32, b: &i32| a < b);
    assert!(empty.is_empty(), "Heapifying nothing should give an empty heap.");
}

#[test]
fn test_replace() {
    let mut heap: Heap<i32, _> = [4, 2, 6].into_iter().collect();
    assert_eq!(heap.replace(5), Some(2), "Replace should return the old front.");
    assert_heap(&heap);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.peek(), Some(&4));

    let mut empty = Heap::min_heap();
    assert_eq!(empty.replace(1), None);
    assert!(empty.is_empty(), "Replacing on an empty heap should leave it empty.");
    assert_eq!(empty.peek(), None);
}

#[test]
fn test_remove_at() {
    let mut heap: Heap<u32, _> = (0..20).collect();
    assert_eq!(heap.remove_at(20), None);

    let target = heap.as_slice()[7];
    assert_eq!(heap.remove_at(7), Some(target));
    assert_heap(&heap);
    assert_eq!(heap.len(), 19);

    let last = heap.len() - 1;
    let target = heap.as_slice()[last];
    assert_eq!(heap.remove_at(last), Some(target));
    assert_heap(&heap);
    assert!(heap.into_sorted().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_custom_order() {
    let mut heap = Heap::new(|a: &String, b: &String| a.len() < b.len());
    for word in ["three", "a", "to", "four"] {
        heap.insert(String::from(word));
    }
    assert_eq!(heap.remove().as_deref(), Some("a"));
    assert_eq!(heap.remove().as_deref(), Some("to"));
    assert_eq!(heap.remove().as_deref(), Some("four"));
}

#[test]
fn test_drops() {
    let counter = CountedDrop::new(0);
    let mut heap = Heap::new(|_: &CountedDrop, _: &CountedDrop| false);
    for _ in 0..5 {
        heap.insert(counter.clone());
    }
    drop(heap.remove());
    assert_eq!(counter.take(), 1);
    drop(heap);
    assert_eq!(counter.take(), 4, "Dropping the heap should drop every remaining value.");
}

#[test]
fn test_priority_queue() {
    let mut queue = PriorityQueue::max_first();
    assert!(queue.is_empty());
    for value in [3, 8, 1, 8, 5] {
        queue.enqueue(value);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.front(), Some(&8));
    assert_eq!(queue.dequeue(), Some(8));
    assert_eq!(queue.dequeue(), Some(8));
    assert_eq!(queue.dequeue(), Some(5));
    assert_eq!(queue.len(), 2);

    let heap = queue.into_heap();
    assert_eq!(&*heap.into_sorted(), &[3, 1]);

    let mut queue = PriorityQueue::from_iter_with(["b", "c", "a"], |a, b| a < b);
    assert_eq!(queue.dequeue(), Some("a"));
}
