//! Unbalanced binary search trees, keyed by a total order ([`Ord`]).
//!
//! [`BinarySearchTree`] stores keys alone, [`BinarySearchTreeMap`] associates a value with each
//! key and [`BinarySearchTreeSet`] exposes the tree through the [`Set`](super::traits::Set)
//! capability. All three share a single recursive node implementation, in which every node owns
//! its children and nothing points back up the tree.
//!
//! These trees don't rebalance, so their height (and the depth of recursion in every operation)
//! depends on insertion order: `O(log n)` for random input, `O(n)` for sorted input.

mod entries;
mod node;

pub mod map;
pub mod set;
pub mod tree;

pub(crate) use entries::*;
pub(crate) use node::*;

#[doc(inline)]
pub use map::BinarySearchTreeMap;
#[doc(inline)]
pub use set::BinarySearchTreeSet;
#[doc(inline)]
pub use tree::BinarySearchTree;
