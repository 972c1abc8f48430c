//! One-shot passphrase generation over a prepared word list.

use super::assembler::{assemble, random_digits, random_symbols};
use crate::config::{GenerationOptions, Mode};
use crate::selection::{choose_words, find_acrostic, SelectionError};
use crate::wordlist::{AcrosticIndex, WordList};
use rand::Rng;

/// Generates passphrases from a word list under fixed options.
///
/// The list, options and acrostic index are read-only; each call to
/// [`generate`](Self::generate) is independent apart from the random
/// source passed in.
#[derive(Debug)]
pub struct PassphraseGenerator<'a> {
    wordlist: &'a WordList,
    options: &'a GenerationOptions,
    selection: Selection<'a>,
}

/// Mode-specific state resolved once in [`PassphraseGenerator::new`].
#[derive(Debug)]
enum Selection<'a> {
    Words(usize),
    Acrostic {
        acrostic: &'a str,
        index: AcrosticIndex,
    },
}

impl<'a> PassphraseGenerator<'a> {
    /// Prepares generation, failing early if no passphrase could be built.
    pub fn new(wordlist: &'a WordList, options: &'a GenerationOptions) -> Result<Self, SelectionError> {
        let selection = match &options.mode {
            Mode::Words(count) => {
                if *count > 0 && wordlist.is_empty() {
                    return Err(SelectionError::EmptyWordList);
                }
                Selection::Words(*count)
            }
            Mode::Acrostic(acrostic) => {
                let index = AcrosticIndex::from_wordlist(wordlist);
                let missing = index.missing_letters(acrostic);
                if !missing.is_empty() {
                    return Err(SelectionError::MissingLetters(missing));
                }
                Selection::Acrostic {
                    acrostic: acrostic.as_str(),
                    index,
                }
            }
        };

        Ok(Self {
            wordlist,
            options,
            selection,
        })
    }

    /// Draws the uncased words for one passphrase.
    pub fn select_words<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>, SelectionError> {
        match &self.selection {
            Selection::Words(count) => choose_words(self.wordlist, *count, rng),
            Selection::Acrostic { acrostic, index } => find_acrostic(acrostic, index, rng),
        }
    }

    /// Generates one complete passphrase.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, SelectionError> {
        let words = self.select_words(rng)?;
        let cased = self.options.case.apply(words.as_slice(), rng);
        let digits = random_digits(self.options.num_digits, rng);
        let symbols = random_symbols(self.options.num_symbols, rng);
        Ok(assemble(cased.as_slice(), &self.options.delimiter, &digits, &symbols))
    }
}

/// Generates a single passphrase from `wordlist`.
pub fn generate_passphrase<R: Rng + ?Sized>(
    wordlist: &WordList,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<String, SelectionError> {
    PassphraseGenerator::new(wordlist, options)?.generate(rng)
}
