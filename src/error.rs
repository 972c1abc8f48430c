//! Crate-level error type.

use crate::analysis::EntropyError;
use crate::config::ConfigError;
use crate::interactive::InteractiveError;
use crate::random::RngError;
use crate::selection::SelectionError;
use crate::wordlist::WordlistError;
use std::io;
use thiserror::Error;

/// Any failure that stops a run.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Word source missing, unreadable or badly filtered.
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    /// No passphrase can be built from the list.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Verbose report over a pool too small to measure.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
    /// No acceptable random source.
    #[error(transparent)]
    Rng(#[from] RngError),
    /// Interactive session ended or failed.
    #[error(transparent)]
    Interactive(#[from] InteractiveError),
    /// Writing passphrases failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Returns true if the user ended an interactive session.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Interactive(InteractiveError::Cancelled))
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_cancelled() {
            0
        } else {
            1
        }
    }
}
