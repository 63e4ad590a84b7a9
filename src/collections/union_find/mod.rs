//! A module containing [`UnionFind`], a disjoint-set forest over arbitrary hashable elements.

mod union_find;

pub use union_find::*;
