//! A module containing [`Trie`], a prefix tree of words.

mod trie;
mod tests;

pub use trie::*;
