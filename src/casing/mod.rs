//! Casing policies applied to selected words.
//!
//! Every policy maps a word sequence to a new sequence of the same length.
//! Only [`CaseMethod::Random`] consumes randomness; it also has a
//! reproducible mode where each word's coin flip is seeded from the word
//! itself, so test expectations can be written down.

use crate::random::rng_for_text;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name did not match any casing policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown case method {0:?} (expected one of: sentence, alternating, upper, lower, random, first, capitalize)")]
pub struct UnknownCaseMethod(
    /// The name as given.
    pub String,
);

/// Casing policy, selected by name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseMethod {
    /// First word capitalized, the rest untouched.
    #[default]
    Sentence,
    /// Even positions uppercased, odd positions lowercased.
    Alternating,
    /// Every word uppercased.
    Upper,
    /// Every word lowercased.
    Lower,
    /// Each word uppercased or lowercased on a fair coin flip.
    Random,
    /// Every word capitalized.
    First,
    /// Every word capitalized. Same as `First`.
    Capitalize,
}

impl CaseMethod {
    /// All methods, in the order they are listed to users.
    pub const ALL: [CaseMethod; 7] = [
        CaseMethod::Sentence,
        CaseMethod::Alternating,
        CaseMethod::Upper,
        CaseMethod::Lower,
        CaseMethod::Random,
        CaseMethod::First,
        CaseMethod::Capitalize,
    ];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            CaseMethod::Sentence => "sentence",
            CaseMethod::Alternating => "alternating",
            CaseMethod::Upper => "upper",
            CaseMethod::Lower => "lower",
            CaseMethod::Random => "random",
            CaseMethod::First => "first",
            CaseMethod::Capitalize => "capitalize",
        }
    }

    /// Applies this policy, drawing coin flips from `rng` when needed.
    pub fn apply<S, R>(self, words: &[S], rng: &mut R) -> Vec<String>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        match self {
            CaseMethod::Random => random_case(words, rng),
            other => other.apply_deterministic(words),
        }
    }

    /// Applies this policy with per-word seeded coin flips for `Random`.
    ///
    /// The same word always receives the same casing. Intended for tests.
    pub fn apply_reproducible<S: AsRef<str>>(self, words: &[S]) -> Vec<String> {
        match self {
            CaseMethod::Random => random_case_reproducible(words),
            other => other.apply_deterministic(words),
        }
    }

    fn apply_deterministic<S: AsRef<str>>(self, words: &[S]) -> Vec<String> {
        match self {
            CaseMethod::Sentence => sentence_case(words),
            CaseMethod::Alternating => alternating_case(words),
            CaseMethod::Upper => upper_case(words),
            CaseMethod::Lower => lower_case(words),
            CaseMethod::First | CaseMethod::Capitalize => capitalize_case(words),
            CaseMethod::Random => random_case_reproducible(words),
        }
    }
}

impl fmt::Display for CaseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseMethod {
    type Err = UnknownCaseMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseMethod::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| UnknownCaseMethod(s.to_string()))
    }
}

/// Every word lowercased.
pub fn lower_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_lowercase()).collect()
}

/// Every word uppercased.
pub fn upper_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_uppercase()).collect()
}

/// First character of every word uppercased, the rest lowercased.
pub fn capitalize_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| capitalize(w.as_ref())).collect()
}

/// Only the first word capitalized.
pub fn sentence_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                capitalize(w.as_ref())
            } else {
                w.as_ref().to_string()
            }
        })
        .collect()
}

/// Uppercase at even positions, lowercase at odd ones.
pub fn alternating_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    lower_case(words)
        .into_iter()
        .enumerate()
        .map(|(i, w)| if i % 2 == 0 { w.to_uppercase() } else { w })
        .collect()
}

/// Each word uppercased or lowercased on a coin flip from `rng`.
pub fn random_case<S, R>(words: &[S], rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    lower_case(words)
        .into_iter()
        .map(|w| if rng.gen_bool(0.5) { w.to_uppercase() } else { w })
        .collect()
}

/// Like [`random_case`], but each flip comes from a generator seeded with
/// the lowercased word.
pub fn random_case_reproducible<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    lower_case(words)
        .into_iter()
        .map(|w| {
            if rng_for_text(&w).gen_bool(0.5) {
                w.to_uppercase()
            } else {
                w
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}
