//! Run configuration.
//!
//! Options are resolved once, before any word is drawn, from three layers:
//! built-in defaults, an optional TOML file, and command-line flags. The
//! resulting [`Settings`] are never mutated during generation.

mod file;
mod options;

pub use file::{ConfigError, FileConfig, GenerationSection, OutputSection, WordlistSection, CONFIG_ENV};
pub use options::{
    GenerationOptions, Mode, OutputOptions, Settings, WordlistOptions, DEFAULT_COUNT,
    DEFAULT_DELIMITER, DEFAULT_NUM_DIGITS, DEFAULT_NUM_SYMBOLS, DEFAULT_NUM_WORDS,
    DEFAULT_SEPARATOR,
};
