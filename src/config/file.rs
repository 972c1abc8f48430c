//! TOML configuration file.
//!
//! Every key is optional; a value present here replaces the built-in
//! default and is in turn replaced by the matching command-line flag.
//!
//! ```toml
//! [wordlist]
//! file = "common-en"
//! min_length = 4
//! max_length = 8
//! valid_chars = "[a-z]"
//!
//! [generation]
//! num_words = 4
//! delimiter = "-"
//! case = "capitalize"
//! num_digits = 2
//! num_symbols = 0
//!
//! [output]
//! count = 3
//! ```

use crate::casing::CaseMethod;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "WORDPASS_CONFIG";

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config file: {0}")]
    ParseError(String),
    /// Both `num_words` and `acrostic` are set.
    #[error("num_words and acrostic are mutually exclusive")]
    ConflictingMode,
}

/// Full configuration file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Word source and filter.
    #[serde(default)]
    pub wordlist: WordlistSection,
    /// Passphrase shape.
    #[serde(default)]
    pub generation: GenerationSection,
    /// Emission.
    #[serde(default)]
    pub output: OutputSection,
    /// Permit a time-seeded generator when OS entropy is unavailable.
    #[serde(default)]
    pub allow_weak_rng: Option<bool>,
}

/// `[wordlist]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordlistSection {
    /// Bundled list name or path.
    pub file: Option<String>,
    /// Minimum word length.
    pub min_length: Option<usize>,
    /// Maximum word length.
    pub max_length: Option<usize>,
    /// Regex fragment for one allowed character.
    pub valid_chars: Option<String>,
}

/// `[generation]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationSection {
    /// Words per passphrase. Conflicts with `acrostic`.
    pub num_words: Option<usize>,
    /// Word initials to spell out.
    pub acrostic: Option<String>,
    /// Placed between words.
    pub delimiter: Option<String>,
    /// Casing policy name.
    pub case: Option<CaseMethod>,
    /// Random digits appended.
    pub num_digits: Option<usize>,
    /// Random symbols appended.
    pub num_symbols: Option<usize>,
    /// Confirm each passphrase.
    pub interactive: Option<bool>,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Passphrases to print.
    pub count: Option<usize>,
    /// Written after each passphrase.
    pub separator: Option<String>,
    /// Print the entropy report.
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config file");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.num_words.is_some() && self.generation.acrostic.is_some() {
            return Err(ConfigError::ConflictingMode);
        }
        Ok(())
    }
}
