//! Deduplicated word collection.

use std::collections::HashSet;

/// Words that passed the filter for this run.
///
/// Duplicates are dropped on construction; the first occurrence keeps
/// its position, so iteration follows the order of the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from arbitrary words, dropping repeats.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word passed the filter.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in file order.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterates over the words in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Returns true if `word` is in the list (exact match).
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
