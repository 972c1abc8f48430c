//! Wordpass Library
//!
//! Generates memorable passphrases from random dictionary words, in the
//! spirit of "correct horse battery staple".
//!
//! # Architecture
//!
//! The system is a short pipeline over static data:
//!
//! ```text
//! locate → filter → (acrostic index) → select → case → assemble
//!              ↓
//!        entropy report
//! ```
//!
//! # Design Principles
//!
//! - **Secure by default**: words are drawn from an OS-seeded ChaCha20
//!   generator; a weaker generator is only used after an explicit opt-in
//! - **Injected randomness**: every random decision takes the generator as
//!   an argument, so runs can be reproduced from a seed in tests
//! - **Read once**: the word file is read and filtered before generation
//!   starts and never touched again
//!
//! # Example
//!
//! ```no_run
//! use wordpass::{
//!     assembly::PassphraseGenerator,
//!     config::GenerationOptions,
//!     random::PassphraseRng,
//!     wordlist::generate_wordlist,
//! };
//!
//! let wordlist = generate_wordlist(None, 3, 9, "[a-z]").unwrap();
//! let options = GenerationOptions::acrostic("wolf");
//! let mut rng = PassphraseRng::from_os_entropy().unwrap();
//!
//! let generator = PassphraseGenerator::new(&wordlist, &options).unwrap();
//! println!("{}", generator.generate(&mut rng).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod app;
pub mod assembly;
pub mod casing;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod random;
pub mod selection;
pub mod wordlist;

// Re-export commonly used types at crate root
pub use analysis::{EntropyError, EntropyReport};
pub use assembly::{assemble, generate_passphrase, PassphraseGenerator};
pub use casing::CaseMethod;
pub use cli::Cli;
pub use config::{GenerationOptions, Mode, Settings};
pub use error::Error;
pub use random::{PassphraseRng, WeakRngPolicy};
pub use selection::{choose_words, find_acrostic, SelectionError};
pub use wordlist::{generate_wordlist, locate_wordfile, AcrosticIndex, WordFilter, WordList};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
