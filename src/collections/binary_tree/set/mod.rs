//! A module containing [`BinarySearchTreeSet`].
//!
//! [`BinarySearchTreeSet`] is also re-exported under the parent module.

mod binary_search_tree_set;

pub use binary_search_tree_set::*;
