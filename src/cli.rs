//! Command-line interface.
//!
//! Flags are optional so that an unset flag can fall through to the config
//! file and then to the built-in default.

use crate::casing::CaseMethod;
use crate::config::{
    ConfigError, FileConfig, GenerationOptions, Mode, OutputOptions, Settings, WordlistOptions,
    CONFIG_ENV,
};
use clap::Parser;
use std::path::PathBuf;

/// Generate memorable passphrases from random dictionary words.
#[derive(Debug, Parser)]
#[command(name = "wordpass", version, disable_version_flag = true)]
pub struct Cli {
    /// Use the words in WORDFILE: a bundled list name or a path
    /// (default: the bundled common-en list, then system dictionaries).
    #[arg(short = 'w', long, value_name = "WORDFILE")]
    pub wordfile: Option<String>,

    /// Only use words with at least MIN_LENGTH characters [default: 3].
    #[arg(long = "min", value_name = "MIN_LENGTH")]
    pub min_length: Option<usize>,

    /// Only use words with at most MAX_LENGTH characters [default: 9].
    #[arg(long = "max", value_name = "MAX_LENGTH")]
    pub max_length: Option<usize>,

    /// Generate passphrases of exactly NUM_WORDS words [default: 3].
    #[arg(short = 'n', long, value_name = "NUM_WORDS", conflicts_with = "acrostic")]
    pub numwords: Option<usize>,

    /// Generate passphrases whose words start with the letters of ACROSTIC.
    #[arg(short = 'a', long, value_name = "ACROSTIC")]
    pub acrostic: Option<String>,

    /// Show each passphrase and ask for confirmation until one is accepted.
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Only use words made of characters matching the regex VALID_CHARS
    /// (e.g. '[a-z]') [default: .].
    #[arg(short = 'v', long, value_name = "VALID_CHARS")]
    pub valid_chars: Option<String>,

    /// Report the entropy of the current options.
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Generate COUNT passphrases [default: 5].
    #[arg(short = 'c', long, value_name = "COUNT")]
    pub count: Option<usize>,

    /// Separate words within a passphrase with DELIM [default: .].
    #[arg(short = 'd', long, value_name = "DELIM", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Separate passphrases with SEP [default: newline].
    #[arg(short = 's', long, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Casing applied to the words [default: sentence].
    #[arg(short = 'C', long, value_enum, value_name = "CASE")]
    pub case: Option<CaseMethod>,

    /// Fall back to a less-secure generator if the system has no secure one
    /// (also enabled by WORDPASS_ALLOW_WEAK_RNG).
    #[arg(long)]
    pub allow_weak_rng: bool,

    /// Number of symbols to append [default: 1].
    #[arg(long, value_name = "NUM_SYMBOLS")]
    pub num_symbols: Option<usize>,

    /// Number of digits to append [default: 1].
    #[arg(long, value_name = "NUM_DIGITS")]
    pub num_digits: Option<usize>,

    /// Read defaults from a TOML config file (also WORDPASS_CONFIG).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version.
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Config file named by `--config`, else by the environment.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Loads the config file, or an empty one if none is configured.
    pub fn load_file_config(&self) -> Result<FileConfig, ConfigError> {
        match self.config_path() {
            Some(path) => FileConfig::from_file(path),
            None => Ok(FileConfig::default()),
        }
    }

    /// Layers flags over `file` over the defaults.
    ///
    /// An empty acrostic counts as no acrostic.
    pub fn into_settings(self, file: FileConfig) -> Settings {
        let wordlist_defaults = WordlistOptions::default();
        let generation_defaults = GenerationOptions::default();
        let output_defaults = OutputOptions::default();

        let file_mode = match (non_empty(file.generation.acrostic), file.generation.num_words) {
            (Some(acrostic), _) => Some(Mode::Acrostic(acrostic)),
            (None, Some(count)) => Some(Mode::Words(count)),
            (None, None) => None,
        };
        let mode = match (non_empty(self.acrostic), self.numwords) {
            (Some(acrostic), _) => Mode::Acrostic(acrostic),
            (None, Some(count)) => Mode::Words(count),
            (None, None) => file_mode.unwrap_or(generation_defaults.mode),
        };

        Settings {
            wordlist: WordlistOptions {
                wordfile: self.wordfile.or(file.wordlist.file),
                min_length: self
                    .min_length
                    .or(file.wordlist.min_length)
                    .unwrap_or(wordlist_defaults.min_length),
                max_length: self
                    .max_length
                    .or(file.wordlist.max_length)
                    .unwrap_or(wordlist_defaults.max_length),
                valid_chars: self
                    .valid_chars
                    .or(file.wordlist.valid_chars)
                    .unwrap_or(wordlist_defaults.valid_chars),
            },
            generation: GenerationOptions {
                mode,
                delimiter: self
                    .delimiter
                    .or(file.generation.delimiter)
                    .unwrap_or(generation_defaults.delimiter),
                case: self
                    .case
                    .or(file.generation.case)
                    .unwrap_or(generation_defaults.case),
                num_digits: self
                    .num_digits
                    .or(file.generation.num_digits)
                    .unwrap_or(generation_defaults.num_digits),
                num_symbols: self
                    .num_symbols
                    .or(file.generation.num_symbols)
                    .unwrap_or(generation_defaults.num_symbols),
                interactive: self.interactive || file.generation.interactive.unwrap_or(false),
            },
            output: OutputOptions {
                count: self.count.or(file.output.count).unwrap_or(output_defaults.count),
                separator: self
                    .separator
                    .or(file.output.separator)
                    .unwrap_or(output_defaults.separator),
                verbose: self.verbose || file.output.verbose.unwrap_or(false),
            },
            allow_weak_rng: self.allow_weak_rng || file.allow_weak_rng.unwrap_or(false),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
