//! Entropy estimates for the current options.
//!
//! The estimate is `log2(pool) * words`, assuming uniform word choice.
//! In acrostic mode the pool is the *sum* of the bucket sizes for the
//! acrostic's letters. That is only an approximation (the real count of
//! possible passphrases is the product of the bucket sizes) and is kept
//! as-is so reports stay comparable across versions.

use crate::config::Mode;
use crate::wordlist::{AcrosticIndex, WordList};
use std::fmt;
use thiserror::Error;

/// Errors raised when no meaningful estimate exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntropyError {
    #[error(
        "cannot estimate entropy: the candidate pool holds {pool_size} word(s), at least 2 are needed"
    )]
    /// Fewer than two candidates: every draw is forced.
    PoolTooSmall {
        /// Candidates available to each draw.
        pool_size: usize,
    },
}

/// Entropy estimate for passphrases drawn from a candidate pool.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyReport {
    pool_size: usize,
    word_count: usize,
    bits_per_word: f64,
}

impl EntropyReport {
    /// Estimates entropy for `word_count` draws from `pool_size` candidates.
    pub fn new(pool_size: usize, word_count: usize) -> Result<Self, EntropyError> {
        if pool_size < 2 {
            return Err(EntropyError::PoolTooSmall { pool_size });
        }

        Ok(Self {
            pool_size,
            word_count,
            bits_per_word: (pool_size as f64).log2(),
        })
    }

    /// Picks the pool matching `mode`: the whole list in plain mode, the
    /// summed bucket sizes in acrostic mode.
    pub fn for_mode(list: &WordList, mode: &Mode) -> Result<Self, EntropyError> {
        let pool_size = match mode.acrostic() {
            Some(acrostic) => AcrosticIndex::from_wordlist(list).pool_size(acrostic),
            None => list.len(),
        };
        Self::new(pool_size, mode.word_count())
    }

    /// Number of candidate words.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Words per passphrase.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// `log2(pool_size)`.
    pub fn bits_per_word(&self) -> f64 {
        self.bits_per_word
    }

    /// `bits_per_word * word_count`.
    pub fn total_bits(&self) -> f64 {
        self.bits_per_word * self.word_count as f64
    }
}

impl fmt::Display for EntropyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "With the current options, your word list contains {} words.",
            self.pool_size
        )?;
        writeln!(
            f,
            "A {} word password from this list will have roughly {} ({:.2} * {}) bits of entropy,",
            self.word_count,
            self.total_bits().floor() as u64,
            self.bits_per_word,
            self.word_count
        )?;
        write!(f, "assuming truly random word selection.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_word_pool() {
        let report = EntropyReport::new(2, 1).unwrap();
        assert_eq!(report.bits_per_word(), 1.0);
        assert_eq!(report.total_bits(), 1.0);
    }

    #[test]
    fn test_scales_with_word_count() {
        let report = EntropyReport::new(1024, 4).unwrap();
        assert_eq!(report.bits_per_word(), 10.0);
        assert_eq!(report.total_bits(), 40.0);
    }

    #[test]
    fn test_tiny_pool_rejected() {
        assert_eq!(
            EntropyReport::new(0, 3),
            Err(EntropyError::PoolTooSmall { pool_size: 0 })
        );
        assert_eq!(
            EntropyReport::new(1, 3),
            Err(EntropyError::PoolTooSmall { pool_size: 1 })
        );
    }

    #[test]
    fn test_acrostic_sums_bucket_sizes() {
        let list = WordList::from_words(["apple", "ant", "bee", "bat", "cat"]);
        let report = EntropyReport::for_mode(&list, &Mode::Acrostic("ab".into())).unwrap();

        assert_eq!(report.pool_size(), 4);
        assert_eq!(report.word_count(), 2);
        assert_eq!(report.bits_per_word(), 2.0);
    }

    #[test]
    fn test_acrostic_missing_letters_contribute_nothing() {
        let list = WordList::from_words(["apple", "ant", "bee"]);
        let report = EntropyReport::for_mode(&list, &Mode::Acrostic("az".into())).unwrap();
        assert_eq!(report.pool_size(), 2);
    }

    #[test]
    fn test_plain_mode_uses_whole_list() {
        let list = WordList::from_words(["apple", "ant", "bee", "bat"]);
        let report = EntropyReport::for_mode(&list, &Mode::Words(5)).unwrap();

        assert_eq!(report.pool_size(), 4);
        assert_eq!(report.word_count(), 5);
        assert_eq!(report.total_bits(), 10.0);
    }

    #[test]
    fn test_empty_list_rejected() {
        let result = EntropyReport::for_mode(&WordList::default(), &Mode::Words(3));
        assert!(matches!(result, Err(EntropyError::PoolTooSmall { pool_size: 0 })));
    }

    #[test]
    fn test_report_text() {
        let report = EntropyReport::new(7776, 3).unwrap();
        assert_eq!(
            report.to_string(),
            "With the current options, your word list contains 7776 words.\n\
             A 3 word password from this list will have roughly 38 (12.92 * 3) bits of entropy,\n\
             assuming truly random word selection."
        );
    }
}
