//! Passphrase assembly.
//!
//! Cased words are joined with the delimiter, then random digits and
//! random symbols are appended with no separator in between.

mod assembler;
mod generator;

pub use assembler::{assemble, random_digits, random_symbols, ALLOWED_SYMBOLS};
pub use generator::{generate_passphrase, PassphraseGenerator};
