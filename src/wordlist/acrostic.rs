//! First-character buckets for acrostic generation.

use super::WordList;
use std::collections::HashMap;

/// Words of a [`WordList`] grouped by their first character.
///
/// A letter with no words has no bucket at all; buckets are never empty.
#[derive(Debug, Clone, Default)]
pub struct AcrosticIndex {
    buckets: HashMap<char, Vec<String>>,
}

impl AcrosticIndex {
    /// Groups `list` by first character, keeping list order inside each bucket.
    pub fn from_wordlist(list: &WordList) -> Self {
        let mut buckets: HashMap<char, Vec<String>> = HashMap::new();
        for word in list {
            if let Some(first) = word.chars().next() {
                buckets.entry(first).or_default().push(word.clone());
            }
        }

        tracing::debug!(buckets = buckets.len(), "Built acrostic index");
        Self { buckets }
    }

    /// Words starting with `letter`, if any.
    pub fn bucket(&self, letter: char) -> Option<&[String]> {
        self.buckets.get(&letter).map(Vec::as_slice)
    }

    /// Number of distinct first characters.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the source list was empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of bucket sizes over the characters of `acrostic`.
    ///
    /// Repeated characters count once per occurrence; missing buckets
    /// contribute zero.
    pub fn pool_size(&self, acrostic: &str) -> usize {
        acrostic
            .chars()
            .map(|letter| self.bucket(letter).map_or(0, <[String]>::len))
            .sum()
    }

    /// Characters of `acrostic` without a bucket, each listed once, in order.
    pub fn missing_letters(&self, acrostic: &str) -> Vec<char> {
        let mut missing: Vec<char> = Vec::new();
        for letter in acrostic.chars() {
            if !self.buckets.contains_key(&letter) && !missing.contains(&letter) {
                missing.push(letter);
            }
        }
        missing
    }
}
