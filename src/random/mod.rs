//! Injected randomness for word selection and formatting.
//!
//! Every random decision in the pipeline draws from a value passed in by
//! the caller instead of a process-wide generator, so tests can substitute
//! a deterministic seed.

mod source;

pub use source::{rng_for_text, PassphraseRng, RngError, RngStrength, WeakRngPolicy, ALLOW_WEAK_RNG_ENV};
