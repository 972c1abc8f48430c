//! Length and character-class filtering of word sources.

use super::{locate_wordfile, WordList, WordSource, EMBEDDED_WORDLIST};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shortest word kept by default.
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// Longest word kept by default.
pub const DEFAULT_MAX_LENGTH: usize = 9;

/// Pattern for one allowed character: anything.
pub const DEFAULT_VALID_CHARS: &str = ".";

/// Errors raised while locating, reading or filtering a word source.
#[derive(Debug, Error)]
pub enum WordlistError {
    /// No candidate word file exists.
    #[error("could not find a word file, or word file does not exist")]
    NotFound,
    /// The valid-chars fragment does not compile.
    #[error("invalid valid-chars pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The fragment as given.
        pattern: String,
        /// Regex compile error.
        #[source]
        source: regex::Error,
    },
    /// The word source could not be opened or is not UTF-8.
    #[error("failed to read word file {}: {source}", .path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Accepts words of `min_length..=max_length` characters, each matching
/// the valid-chars pattern.
#[derive(Debug, Clone)]
pub struct WordFilter {
    min_length: usize,
    max_length: usize,
    regex: Regex,
}

impl WordFilter {
    /// Builds the filter.
    ///
    /// A maximum below the minimum is raised to the minimum; the minimum
    /// is never lowered.
    pub fn new(min_length: usize, max_length: usize, valid_chars: &str) -> Result<Self, WordlistError> {
        let max_length = if min_length > max_length {
            tracing::warn!(
                min_length,
                max_length,
                "Maximum word length less than minimum. Setting maximum equal to minimum."
            );
            min_length
        } else {
            max_length
        };

        let pattern = format!("^(?:{valid_chars}){{{min_length},{max_length}}}$");
        let regex = Regex::new(&pattern).map_err(|source| WordlistError::InvalidPattern {
            pattern: valid_chars.to_string(),
            source,
        })?;

        Ok(Self {
            min_length,
            max_length,
            regex,
        })
    }

    /// Minimum word length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Effective maximum, after normalization.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns true if the already-trimmed `word` passes.
    pub fn matches(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Filters newline-delimited UTF-8 entries from `reader`.
    pub fn filter_reader<R: BufRead>(&self, reader: R) -> io::Result<WordList> {
        let mut kept = Vec::new();
        let mut total = 0usize;

        for line in reader.lines() {
            let line = line?;
            total += 1;
            let word = line.trim();
            if self.matches(word) {
                kept.push(word.to_string());
            }
        }

        let list = WordList::from_words(kept);
        tracing::debug!(
            lines = total,
            kept = list.len(),
            min_length = self.min_length,
            max_length = self.max_length,
            "Filtered word source"
        );
        Ok(list)
    }

    /// Reads and filters the word file at `path`.
    pub fn load(&self, path: &Path) -> Result<WordList, WordlistError> {
        let read_error = |source: io::Error| WordlistError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        self.filter_reader(BufReader::new(file)).map_err(read_error)
    }

    /// Reads and filters a located word source.
    pub fn load_source(&self, source: &WordSource) -> Result<WordList, WordlistError> {
        match source {
            WordSource::File(path) => self.load(path),
            WordSource::Embedded => {
                self.filter_reader(EMBEDDED_WORDLIST.as_bytes())
                    .map_err(|source| WordlistError::Read {
                        path: PathBuf::from(super::DEFAULT_WORDFILE),
                        source,
                    })
            }
        }
    }
}

/// Locates `wordfile` and returns its filtered word list.
pub fn generate_wordlist(
    wordfile: Option<&str>,
    min_length: usize,
    max_length: usize,
    valid_chars: &str,
) -> Result<WordList, WordlistError> {
    let filter = WordFilter::new(min_length, max_length, valid_chars)?;
    let source = locate_wordfile(wordfile).ok_or(WordlistError::NotFound)?;
    filter.load_source(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{Cursor, Write};

    fn filter(min: usize, max: usize, valid: &str, input: &str) -> WordList {
        WordFilter::new(min, max, valid)
            .unwrap()
            .filter_reader(Cursor::new(input))
            .unwrap()
    }

    #[test]
    fn test_length_bounds() {
        let list = filter(3, 5, ".", "ab\nabc\nabcde\nabcdef\n");
        assert_eq!(list.as_slice(), &["abc", "abcde"]);
    }

    #[test]
    fn test_whitespace_trimmed_and_deduplicated() {
        let list = filter(3, 9, ".", "  apple \napple\r\n\tapple\nbee\n\n");
        assert_eq!(list.as_slice(), &["apple", "bee"]);
    }

    #[test]
    fn test_character_class() {
        let list = filter(3, 9, "[a-z]", "apple\nApple\nbee's\nzoo\n");
        assert_eq!(list.as_slice(), &["apple", "zoo"]);
    }

    #[test]
    fn test_alternation_fragment_is_grouped() {
        let list = filter(2, 3, "a|b", "ab\nba\naab\nabc\nc\n");
        assert_eq!(list.as_slice(), &["ab", "ba", "aab"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let list = filter(4, 4, ".", "café\nnaïve\n");
        assert_eq!(list.as_slice(), &["café"]);
    }

    #[test]
    fn test_min_greater_than_max_raises_max() {
        let filter = WordFilter::new(6, 4, ".").unwrap();
        assert_eq!(filter.min_length(), 6);
        assert_eq!(filter.max_length(), 6);

        let list = filter.filter_reader(Cursor::new("four\nsixsix\nsevenly\n")).unwrap();
        assert_eq!(list.as_slice(), &["sixsix"]);
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = WordFilter::new(3, 9, "[a-z");
        assert!(matches!(result, Err(WordlistError::InvalidPattern { .. })));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let list = filter(10, 12, ".", "short\nwords\n");
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\nant\nbee\nx").unwrap();

        let list = WordFilter::new(3, 9, ".").unwrap().load(file.path()).unwrap();
        assert_eq!(list.as_slice(), &["apple", "ant", "bee"]);
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"apple\n\xff\xfe\n").unwrap();

        let result = WordFilter::new(3, 9, ".").unwrap().load(file.path());
        assert!(matches!(result, Err(WordlistError::Read { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WordFilter::new(3, 9, ".").unwrap().load(&dir.path().join("missing"));
        assert!(matches!(result, Err(WordlistError::Read { .. })));
    }

    #[test]
    fn test_load_embedded_source() {
        let list = WordFilter::new(3, 9, ".").unwrap().load_source(&WordSource::Embedded).unwrap();
        assert!(list.len() > 2000);
        assert!(list.iter().all(|w| (3..=9).contains(&w.chars().count())));
    }

    #[test]
    fn test_generate_wordlist_from_default() {
        let list = generate_wordlist(None, 4, 4, "[a-z]").unwrap();
        assert!(!list.is_empty());
        assert!(list.iter().all(|w| w.len() == 4));
    }

    proptest! {
        #[test]
        fn prop_filtered_words_satisfy_predicate(
            words in prop::collection::vec("[a-zA-Z0-9]{0,12}", 0..50),
            min in 0usize..8,
            max in 0usize..12,
        ) {
            let input = words.join("\n");
            let filter = WordFilter::new(min, max, "[a-z]").unwrap();
            let list = filter.filter_reader(Cursor::new(input)).unwrap();

            let effective_max = max.max(min);
            let mut seen = std::collections::HashSet::new();
            for word in &list {
                let len = word.chars().count();
                prop_assert!(len >= min && len <= effective_max);
                prop_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
                prop_assert!(seen.insert(word.clone()));
            }
        }
    }
}
