#![cfg(test)]

use super::*;

#[test]
fn test_insert_and_contains() {
    let mut trie = Trie::new();
    assert!(trie.is_empty());
    assert!(trie.insert("cat"));
    assert!(trie.insert("car"));
    assert!(trie.contains("cat"));
    assert!(trie.contains("car"));
    assert!(!trie.contains("ca"), "A prefix shouldn't be contained unless it was inserted.");
    assert!(!trie.contains("cart"));
    assert!(trie.is_prefix("ca"));
    assert!(trie.is_prefix("cat"), "A word should be a prefix of itself.");
    assert!(!trie.is_prefix("co"));
    assert_eq!(trie.len(), 2);

    assert!(!trie.insert("cat"), "Inserting a word twice should be rejected.");
    assert_eq!(trie.len(), 2);

    assert!(trie.insert("ca"));
    assert!(trie.contains("ca"));
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_empty_word() {
    let mut trie = Trie::new();
    assert!(!trie.insert(""), "The empty string should never be inserted.");
    assert!(trie.is_empty());
    assert!(!trie.contains(""));
    assert!(trie.is_prefix(""), "The empty string is a prefix of everything.");
    trie.insert("a");
    assert!(!trie.contains(""));
}

#[test]
fn test_case_insensitive() {
    let mut trie = Trie::new();
    trie.insert("Hello");
    assert!(trie.contains("hello"));
    assert!(trie.contains("HELLO"));
    assert!(!trie.insert("hELLo"));
    assert_eq!(trie.len(), 1);
    assert!(trie.is_prefix("HeL"));
    assert_eq!(&*trie.words(), &["hello"]);
}

#[test]
fn test_words_with_prefix() {
    let trie: Trie = ["to", "tea", "ted", "ten", "A", "i", "in", "inn"].into_iter().collect();
    assert_eq!(&*trie.words_with_prefix("te"), &["tea", "ted", "ten"]);
    assert_eq!(&*trie.words_with_prefix("in"), &["in", "inn"]);
    assert_eq!(&*trie.words_with_prefix("x"), &[] as &[&str]);
    assert_eq!(
        &*trie.words(),
        &["a", "i", "in", "inn", "tea", "ted", "ten", "to"],
        "Words should come out in lexicographic order."
    );
}

#[test]
fn test_unicode() {
    let mut trie = Trie::new();
    trie.insert("Ärger");
    trie.insert("straße");
    assert!(trie.contains("ärger"));
    assert!(trie.is_prefix("STRA"));
    assert!(trie.contains("STRAße"));
}

#[test]
fn test_format() {
    let trie: Trie = ["b", "a"].into_iter().collect();
    assert_eq!(format!("{trie:?}"), "Trie { words: [\"a\", \"b\"], len: 2 }");
}
