//! A module containing [`BinarySearchTreeMap`] and associated types.
//!
//! The only other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in a map, always in ascending key order.
//!
//! [`BinarySearchTreeMap`] is also re-exported under the parent module.

mod binary_search_tree_map;
mod iter;

pub use binary_search_tree_map::*;
pub use iter::*;
