//! The collection types of this crate, one module per data structure.
//!
//! # Purpose
//! I wrote these types to learn how each data structure keeps its invariants, and what it costs
//! to do so. Each module is independent, apart from the few places where one structure is
//! naturally built out of another (a heap is an array, a trie is a tree of maps).
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref), which saves me from
//! writing some of the more repetitive functionality. Tree types own their children through
//! boxes and never point back up at their parents.

#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linear")]
pub mod linear;
#[cfg(feature = "segment")]
pub mod segment;
#[cfg(feature = "traits")]
pub mod traits;
#[cfg(feature = "trie")]
pub mod trie;
#[cfg(feature = "union_find")]
pub mod union_find;
