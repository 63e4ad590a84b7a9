use std::fmt::{self, Debug, Formatter};

use crate::collections::binary_tree::BinarySearchTreeMap;
use crate::collections::contiguous::DynamicArray;

/// A prefix tree storing a set of lowercase words.
///
/// Every node maps a character to the node for the next one, so words that share a prefix share
/// the nodes for it. A node is marked terminal when a word ends there. Words are lowercased
/// (with [`char::to_lowercase`]) on the way in and every query is lowercased the same way, so
/// matching is case-insensitive. Chains of single children aren't compressed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `m`: The number of characters in the word being inserted or searched for.
/// - `a`: The number of distinct characters following any one prefix.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(m * a)` |
/// | `contains` | `O(m * a)` |
/// | `is_prefix` | `O(m * a)` |
///
/// In particular, none of these depend on the number of words already stored.
///
/// # Examples
/// ```
/// # use learn_collections::collections::trie::Trie;
/// let mut trie = Trie::new();
/// assert!(trie.insert("cat"));
/// assert!(trie.insert("Car"));
/// assert!(!trie.insert("cat"));
/// assert!(trie.contains("car"));
/// assert!(!trie.contains("ca"));
/// assert!(trie.is_prefix("CA"));
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Default, Clone)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

#[derive(Default, Clone)]
struct TrieNode {
    children: BinarySearchTreeMap<char, TrieNode>,
    terminal: bool,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Returns the number of distinct words in the trie.
    pub const fn len(&self) -> usize {
        self.word_count
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `word` to the trie, returning false if it was already there. The empty string is never
    /// added.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for c in lowercase(word) {
            node = node.children.get_or_insert_with(c, TrieNode::default);
        }

        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    /// Returns true if `word` has been inserted. The empty string is never contained.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find(word).is_some_and(|node| node.terminal)
    }

    /// Returns true if `prefix` begins any word in the trie, including the word equal to it. The
    /// empty string is a prefix of everything, even an empty trie.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Returns every word beginning with `prefix`, in lexicographic order.
    ///
    /// # Examples
    /// ```
    /// # use learn_collections::collections::trie::Trie;
    /// let mut trie = Trie::new();
    /// for word in ["tea", "ten", "to", "inn", "tenth"] {
    ///     trie.insert(word);
    /// }
    /// assert_eq!(&*trie.words_with_prefix("te"), &["tea", "ten", "tenth"]);
    /// ```
    pub fn words_with_prefix(&self, prefix: &str) -> DynamicArray<String> {
        let mut words = DynamicArray::new();
        if let Some(node) = self.find(prefix) {
            let mut word: String = lowercase(prefix).collect();
            node.collect_words(&mut word, &mut words);
        }
        words
    }

    /// Returns every word in the trie, in lexicographic order.
    pub fn words(&self) -> DynamicArray<String> {
        self.words_with_prefix("")
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        lowercase(prefix).try_fold(&self.root, |node, c| node.children.get(&c))
    }
}

impl TrieNode {
    /// Pushes `word` if this node ends one, then every word below it, using `word` as a buffer for
    /// the characters on the way down.
    fn collect_words(&self, word: &mut String, words: &mut DynamicArray<String>) {
        if self.terminal {
            words.push(word.clone());
        }
        for (c, child) in self.children.iter() {
            word.push(*c);
            child.collect_words(word, words);
            word.pop();
        }
    }
}

fn lowercase(word: &str) -> impl Iterator<Item = char> + '_ {
    word.chars().flat_map(char::to_lowercase)
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("words", &&*self.words())
            .field("len", &self.word_count)
            .finish()
    }
}
