//! Passphrase strength analysis.
//!
//! Estimates are reported to the user on request; they never influence
//! which words are chosen.

mod entropy;

pub use entropy::{EntropyError, EntropyReport};
