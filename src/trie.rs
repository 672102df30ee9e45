//! Trie over syllable sequences for longest-match category lookup.
//!
//! Each lexicon category gets its own trie. Words are stored as sequences of
//! syllables (split with the same syllabifier the input goes through). The
//! category tag lives next to the trie in the scanner pipeline, not in it.

use std::collections::HashMap;

use crate::error::{Result, TokenizerError};
use crate::syllable::syllabify;

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by syllable
    pub children: HashMap<String, TrieNode>,
    /// Whether this node marks the end of a valid word
    pub is_leaf: bool,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node has any children
    pub fn can_walk(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node is a valid word ending
    pub fn is_match(&self) -> bool {
        self.is_leaf
    }
}

/// A Trie for storing and looking up Myanmar words
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of words in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word (as a slice of syllables) to the trie
    pub fn add(&mut self, syls: &[&str]) {
        let mut current = &mut self.root;

        for syl in syls {
            current = current
                .children
                .entry(syl.to_string())
                .or_insert_with(TrieNode::new);
        }

        if !current.is_leaf {
            self.word_count += 1;
        }
        current.is_leaf = true;
    }

    /// Walk the trie by one syllable, returning the next node if it exists
    pub fn walk<'a>(&'a self, syl: &str, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(syl)
    }

    /// Check if a word exists in the trie
    pub fn has_word(&self, syls: &[&str]) -> bool {
        let mut current = &self.root;

        for syl in syls {
            match current.children.get(*syl) {
                Some(node) => current = node,
                None => return false,
            }
        }

        current.is_leaf
    }

    /// Longest entry starting at `tokens[start]`
    ///
    /// Walks while a path exists and returns the end index (exclusive) of the
    /// deepest terminal node passed.
    pub fn longest_match<S: AsRef<str>>(&self, tokens: &[S], start: usize) -> Option<usize> {
        let mut current: Option<&TrieNode> = None;
        let mut best = None;

        for (i, token) in tokens.iter().enumerate().skip(start) {
            match self.walk(token.as_ref(), current) {
                Some(node) => {
                    if node.is_match() {
                        best = Some(i + 1);
                    }
                    if !node.can_walk() {
                        break;
                    }
                    current = Some(node);
                }
                None => break,
            }
        }

        best
    }
}

/// Builder for loading a category Trie from a word list
pub struct TrieBuilder {
    trie: Trie,
}

impl TrieBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        TrieBuilder { trie: Trie::new() }
    }

    /// Syllabify `word` and add it
    ///
    /// A word that yields no syllables, or that contains whitespace, cannot be
    /// matched against syllabified text and is rejected.
    pub fn add_word(&mut self, category: &'static str, word: &str) -> Result<()> {
        let syls = syllabify(word.trim());
        if syls.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(TokenizerError::Lexicon {
                category,
                entry: word.to_string(),
            });
        }

        let syls: Vec<&str> = syls.iter().map(String::as_str).collect();
        self.trie.add(&syls);
        Ok(())
    }

    /// Build a trie holding every word of one category
    pub fn from_words(category: &'static str, words: &[&str]) -> Result<Trie> {
        let mut builder = TrieBuilder::new();
        for word in words {
            builder.add_word(category, word)?;
        }
        Ok(builder.build())
    }

    /// Build and return the Trie
    pub fn build(self) -> Trie {
        self.trie
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_add_and_lookup() {
        let mut trie = Trie::new();

        trie.add(&["သို့", "မ", "ဟုတ်"]);
        trie.add(&["ပြီး"]);

        assert!(trie.has_word(&["သို့", "မ", "ဟုတ်"]));
        assert!(trie.has_word(&["ပြီး"]));
        assert!(!trie.has_word(&["သို့", "မ"])); // Partial word
        assert!(!trie.has_word(&["ပြီး", "တော့"])); // Non-existent
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_trie_walk() {
        let mut trie = Trie::new();
        trie.add(&["ရက်", "နေ့"]);

        let node1 = trie.walk("ရက်", None);
        assert!(node1.is_some());
        assert!(!node1.unwrap().is_match());

        let node2 = trie.walk("နေ့", node1);
        assert!(node2.is_some());
        assert!(node2.unwrap().is_match());
    }

    #[test]
    fn test_longest_match() {
        let mut trie = Trie::new();
        trie.add(&["ရက်"]);
        trie.add(&["ရက်", "နေ့"]);

        let tokens = ["၁", "ရက်", "နေ့", "မှာ"];
        assert_eq!(trie.longest_match(&tokens, 1), Some(3));
        assert_eq!(trie.longest_match(&tokens, 0), None);
        assert_eq!(trie.longest_match(&tokens, 4), None);
    }

    #[test]
    fn test_longest_match_keeps_shorter_on_dead_end() {
        let mut trie = Trie::new();
        trie.add(&["ပြီး"]);
        trie.add(&["ပြီး", "တော့"]);

        let tokens = ["ပြီး", "နောက်"];
        assert_eq!(trie.longest_match(&tokens, 0), Some(1));
    }

    #[test]
    fn test_trie_builder() {
        let trie = TrieBuilder::from_words("CONJ", &["သို့မဟုတ်", "ပြီး"]).unwrap();

        assert_eq!(trie.len(), 2);
        assert!(trie.has_word(&["သို့", "မ", "ဟုတ်"]));
    }

    #[test]
    fn test_builder_rejects_bad_entries() {
        assert!(TrieBuilder::from_words("CONJ", &[""]).is_err());
        assert!(TrieBuilder::from_words("CONJ", &["သို့ မဟုတ်"]).is_err());
    }
}
