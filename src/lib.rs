//! A teaching library of fundamental data structures, written from scratch on top of nothing more
//! than a boxed block of memory.
//!
//! # Purpose
//! Every type in this crate exists to show how the data structure works, rather than to compete
//! with [`std::collections`]. The structures are small enough to read in one sitting, but they're
//! written to the standard of real code: typed errors, documented panics and tests for the
//! invariants that make each one tick.
//!
//! # Contents
//! - [`DynamicArray`](collections::contiguous::DynamicArray): contiguous storage with amortized
//!   `O(1)` growth and shrinking.
//! - [`BinarySearchTree`](collections::binary_tree::BinarySearchTree) and the map / set built on
//!   the same nodes.
//! - [`Heap`](collections::heap::Heap) and [`PriorityQueue`](collections::heap::PriorityQueue),
//!   ordered by a caller-supplied predicate.
//! - [`SegmentTree`](collections::segment::SegmentTree) for range aggregation with point updates.
//! - [`Trie`](collections::trie::Trie) for word membership and prefix queries.
//! - [`UnionFind`](collections::union_find::UnionFind), a disjoint-set forest.
//!
//! # Error Handling
//! There are two kinds of failure here. Breaking a method's contract, such as indexing out of
//! bounds or asking an empty tree for its minimum, is a bug in the caller and panics with a typed
//! error as the message. Absence, like a missing key or an empty queue, is a normal outcome and is
//! returned as an [`Option`] or [`bool`]. Where a caller would rather check a contract than
//! panic, `try_` methods return strongly typed [`Result`]s.
//!
//! # Dependencies
//! This library doesn't use [`Vec`] to store anything. The one exception to building on a boxed
//! block alone is [`UnionFind`](collections::union_find::UnionFind), which maps its elements to
//! indices with [`std::collections::HashMap`]. The only external dependency is `derive_more`,
//! which writes the repetitive parts of the error enums.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

/// The error types thrown (or returned by `try_` methods) when a contract is broken.
pub use util::error;
