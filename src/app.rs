//! End-to-end run: load the word list, report, emit passphrases.

use crate::analysis::EntropyReport;
use crate::assembly::PassphraseGenerator;
use crate::config::{Mode, Settings, WordlistOptions};
use crate::error::Error;
use crate::interactive::{accept_loop, prompt_word_count, Prompt};
use crate::wordlist::{Locator, WordFilter, WordList, WordlistError};
use rand::Rng;
use std::io::Write;

/// Locates, reads and filters the configured word source.
pub fn load_wordlist(options: &WordlistOptions, locator: &Locator) -> Result<WordList, WordlistError> {
    let filter = WordFilter::new(options.min_length, options.max_length, &options.valid_chars)?;
    let source = locator
        .resolve(options.wordfile.as_deref())
        .ok_or(WordlistError::NotFound)?;
    let list = filter.load_source(&source)?;

    tracing::info!(%source, words = list.len(), "Loaded word list");
    Ok(list)
}

/// Writes `settings.output.count` passphrases to `out`, each followed by
/// the separator.
///
/// In interactive mode the word count is asked for first (acrostic mode
/// skips the question) and every passphrase must be accepted through
/// `prompt`. The entropy report, when requested, precedes the passphrases.
pub fn emit_passphrases<R, W, P>(
    settings: &Settings,
    wordlist: &WordList,
    rng: &mut R,
    out: &mut W,
    prompt: &mut P,
) -> Result<(), Error>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
    P: Prompt + ?Sized,
{
    let mut generation = settings.generation.clone();
    if generation.interactive {
        if let Mode::Words(default) = generation.mode {
            generation.mode = Mode::Words(prompt_word_count(prompt, default)?);
        }
    }

    if settings.output.verbose {
        let report = EntropyReport::for_mode(wordlist, &generation.mode)?;
        writeln!(out, "{report}\n")?;
    }

    let generator = PassphraseGenerator::new(wordlist, &generation)?;
    tracing::debug!(
        words = generation.mode.word_count(),
        count = settings.output.count,
        "Generating passphrases"
    );
    for _ in 0..settings.output.count {
        let passphrase = if generation.interactive {
            accept_loop(prompt, || generator.generate(rng))?
        } else {
            generator.generate(rng)?
        };
        write!(out, "{passphrase}{}", settings.output.separator)?;
    }

    out.flush()?;
    Ok(())
}

/// Runs with the default word-file search order.
pub fn run<R, W, P>(settings: &Settings, rng: &mut R, out: &mut W, prompt: &mut P) -> Result<(), Error>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
    P: Prompt + ?Sized,
{
    let wordlist = load_wordlist(&settings.wordlist, &Locator::default())?;
    emit_passphrases(settings, &wordlist, rng, out, prompt)
}
