//! Joining words and generating suffixes.

use rand::Rng;

/// Symbols that may be appended after the digits.
pub const ALLOWED_SYMBOLS: &str = "!#$%&()*+,-.:;<=>?@[]^_{|}~";

/// Joins `words` with `delimiter` and appends `digits` then `symbols`.
pub fn assemble<S: AsRef<str>>(words: &[S], delimiter: &str, digits: &str, symbols: &str) -> String {
    let mut passphrase = words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(delimiter);
    passphrase.push_str(digits);
    passphrase.push_str(symbols);
    passphrase
}

/// `count` independent uniform decimal digits.
pub fn random_digits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// `count` symbols drawn uniformly from [`ALLOWED_SYMBOLS`].
pub fn random_symbols<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    let alphabet = ALLOWED_SYMBOLS.as_bytes();
    (0..count)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
