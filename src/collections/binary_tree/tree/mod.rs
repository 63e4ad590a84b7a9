//! A module containing [`BinarySearchTree`] and its iterators.
//!
//! [`BinarySearchTree`] is also re-exported under the parent module.

mod binary_search_tree;
mod iter;
mod tests;

pub use binary_search_tree::*;
pub use iter::*;
