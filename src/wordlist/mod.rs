//! Word sources and the filtered word list.
//!
//! A run reads exactly one word file, keeps the entries that pass the
//! length and character-class filter, and never touches the file again.
//! Acrostic generation additionally groups the list by first character.

mod acrostic;
mod filter;
mod list;
mod locate;

pub use acrostic::AcrosticIndex;
pub use filter::{
    generate_wordlist, WordFilter, WordlistError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
    DEFAULT_VALID_CHARS,
};
pub use list::WordList;
pub use locate::{
    default_bundled_dir, expand_home, locate_wordfile, Locator, WordSource, DEFAULT_WORDFILE,
    EMBEDDED_WORDLIST, SYSTEM_WORDFILES, WORDLIST_DIR_ENV,
};
