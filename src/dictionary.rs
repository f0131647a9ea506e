//! Prefix-tree dictionary.
//!
//! Words are stored one letter per node. Lookups are case-insensitive: every
//! letter is folded to lower case before it is used as a key, so a grid of
//! upper-case letters matches a lower-case word list.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::DictionaryError;

/// Fold a letter to its single-character lower-case form.
///
/// Letters whose lower-case form expands to several characters are kept as is.
pub(crate) fn fold(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => letter,
    }
}

/// A node of the prefix tree.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    letter: Option<char>,
    is_word: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// The letter on the edge leading to this node, `None` for the root.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// True if the path from the root to this node spells a complete word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn child_for(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&fold(letter))
    }

    /// Get the child for `letter`, creating it if missing.
    pub fn create_child(&mut self, letter: char) -> &mut TrieNode {
        let key = fold(letter);
        self.children.entry(key).or_insert_with(|| TrieNode::new(key))
    }

    /// Children in ascending letter order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A set of words stored as a prefix tree.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a sequence of words.
    ///
    /// Fails on the first word that appears twice.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Build a dictionary from a word list with one word per line.
    ///
    /// Lines are trimmed and lower-cased; blank lines are skipped.
    pub fn from_word_list(text: &str) -> Result<Self, DictionaryError> {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase),
        )
    }

    /// Read a word list file, see [`Dictionary::from_word_list`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_word_list(&text)?;
        tracing::debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }

    /// Insert a word, creating any missing nodes along the way.
    ///
    /// Returns [`DictionaryError::DuplicateWord`] if the word is already present;
    /// the dictionary still recognises it exactly once.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        let mut node = &mut self.root;
        for letter in word.chars() {
            node = node.create_child(letter);
        }
        if node.is_word {
            return Err(DictionaryError::DuplicateWord(word.to_string()));
        }
        node.is_word = true;
        self.word_count += 1;
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(TrieNode::is_word)
    }

    /// True if some word in the dictionary starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Follow `letter` from `node`, or `None` if no word continues that way.
    pub fn child<'a>(&self, node: &'a TrieNode, letter: char) -> Option<&'a TrieNode> {
        node.child_for(letter)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// All words in ascending order of their folded letters.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        collect_words(&self.root, &mut prefix, &mut words);
        words
    }

    fn walk(&self, letters: &str) -> Option<&TrieNode> {
        letters
            .chars()
            .try_fold(&self.root, |node, letter| node.child_for(letter))
    }
}

fn collect_words(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.is_word {
        out.push(prefix.clone());
    }
    for (letter, child) in node.children() {
        prefix.push(letter);
        collect_words(child, prefix, out);
        prefix.pop();
    }
}
