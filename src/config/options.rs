//! Immutable option snapshots.

use crate::casing::CaseMethod;
use crate::wordlist::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_VALID_CHARS};

/// Words per passphrase.
pub const DEFAULT_NUM_WORDS: usize = 3;
/// Between words.
pub const DEFAULT_DELIMITER: &str = ".";
/// Trailing digits.
pub const DEFAULT_NUM_DIGITS: usize = 1;
/// Trailing symbols.
pub const DEFAULT_NUM_SYMBOLS: usize = 1;
/// Passphrases per run.
pub const DEFAULT_COUNT: usize = 5;
/// After each passphrase.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// How words are selected: a fixed count, or one per acrostic letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Draw this many words from the whole list.
    Words(usize),
    /// Draw one word per character, each starting with that character.
    Acrostic(String),
}

impl Mode {
    /// Number of words a passphrase in this mode contains.
    pub fn word_count(&self) -> usize {
        match self {
            Mode::Words(count) => *count,
            Mode::Acrostic(acrostic) => acrostic.chars().count(),
        }
    }

    /// The acrostic being spelled, if any.
    pub fn acrostic(&self) -> Option<&str> {
        match self {
            Mode::Words(_) => None,
            Mode::Acrostic(acrostic) => Some(acrostic),
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Words(DEFAULT_NUM_WORDS)
    }
}

/// Everything that shapes a single passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Word selection.
    pub mode: Mode,
    /// Placed between words, never after the last one.
    pub delimiter: String,
    /// Casing applied to the selected words.
    pub case: CaseMethod,
    /// Random decimal digits appended after the words.
    pub num_digits: usize,
    /// Random symbols appended after the digits.
    pub num_symbols: usize,
    /// Ask the user to accept each passphrase.
    pub interactive: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            case: CaseMethod::default(),
            num_digits: DEFAULT_NUM_DIGITS,
            num_symbols: DEFAULT_NUM_SYMBOLS,
            interactive: false,
        }
    }
}

impl GenerationOptions {
    /// Default options drawing `count` words.
    pub fn words(count: usize) -> Self {
        Self {
            mode: Mode::Words(count),
            ..Default::default()
        }
    }

    /// Default options spelling out `acrostic`.
    pub fn acrostic(acrostic: impl Into<String>) -> Self {
        Self {
            mode: Mode::Acrostic(acrostic.into()),
            ..Default::default()
        }
    }
}

/// Where the words come from and which ones are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistOptions {
    /// Bundled list name or path; `None` uses the default search.
    pub wordfile: Option<String>,
    /// Shortest word kept, in characters.
    pub min_length: usize,
    /// Longest word kept; raised to `min_length` if lower.
    pub max_length: usize,
    /// Regex fragment matching one allowed character.
    pub valid_chars: String,
}

impl Default for WordlistOptions {
    fn default() -> Self {
        Self {
            wordfile: None,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            valid_chars: DEFAULT_VALID_CHARS.to_string(),
        }
    }
}

/// How generated passphrases are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Number of passphrases.
    pub count: usize,
    /// Written after every passphrase, including the last.
    pub separator: String,
    /// Print the entropy report before the passphrases.
    pub verbose: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            separator: DEFAULT_SEPARATOR.to_string(),
            verbose: false,
        }
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Word source and filter.
    pub wordlist: WordlistOptions,
    /// Passphrase shape.
    pub generation: GenerationOptions,
    /// Emission.
    pub output: OutputOptions,
    /// Permit a time-seeded generator when OS entropy is unavailable.
    pub allow_weak_rng: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.wordlist.min_length, 3);
        assert_eq!(settings.wordlist.max_length, 9);
        assert_eq!(settings.generation.mode, Mode::Words(3));
        assert_eq!(settings.generation.delimiter, ".");
        assert_eq!(settings.generation.case, CaseMethod::Sentence);
        assert_eq!(settings.output.count, 5);
        assert_eq!(settings.output.separator, "\n");
        assert!(!settings.allow_weak_rng);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(Mode::Words(4).word_count(), 4);
        assert_eq!(Mode::Acrostic("café".into()).word_count(), 4);
        assert_eq!(Mode::Acrostic("cat".into()).acrostic(), Some("cat"));
        assert_eq!(Mode::Words(2).acrostic(), None);
    }
}
