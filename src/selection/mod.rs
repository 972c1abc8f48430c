//! Random word selection.
//!
//! Plain mode draws words independently and uniformly, with replacement,
//! from the whole list. Acrostic mode draws one word per target letter
//! from that letter's bucket.

use crate::wordlist::{AcrosticIndex, WordList};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Errors raised while drawing words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Words were requested from an empty list.
    #[error("word list is empty; no words match the current filter")]
    EmptyWordList,
    /// Acrostic characters with no word, deduplicated, in order.
    #[error("{}", describe_missing(.0))]
    MissingLetters(Vec<char>),
}

fn describe_missing(letters: &[char]) -> String {
    letters
        .iter()
        .map(|letter| format!("No words found starting with {letter}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Draws `count` words uniformly at random, with replacement.
pub fn choose_words<R: Rng + ?Sized>(
    list: &WordList,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, SelectionError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let words = list.as_slice();
    if words.is_empty() {
        return Err(SelectionError::EmptyWordList);
    }

    Ok((0..count)
        .map(|_| words[rng.gen_range(0..words.len())].clone())
        .collect())
}

/// Draws one word per character of `acrostic`, in order.
///
/// Fails without drawing anything if any character has no bucket.
pub fn find_acrostic<R: Rng + ?Sized>(
    acrostic: &str,
    index: &AcrosticIndex,
    rng: &mut R,
) -> Result<Vec<String>, SelectionError> {
    let missing = index.missing_letters(acrostic);
    if !missing.is_empty() {
        return Err(SelectionError::MissingLetters(missing));
    }

    let mut words = Vec::with_capacity(acrostic.chars().count());
    for letter in acrostic.chars() {
        let bucket = index
            .bucket(letter)
            .ok_or_else(|| SelectionError::MissingLetters(vec![letter]))?;
        if let Some(word) = bucket.choose(rng) {
            tracing::trace!(%letter, bucket_size = bucket.len(), "Drew acrostic word");
            words.push(word.clone());
        }
    }
    Ok(words)
}
