//! Word file discovery.
//!
//! Candidates are tried in a fixed order and the first existing regular
//! file wins:
//!
//! 1. the requested name inside the bundled word-list directory
//! 2. the requested name as a path, with `~` expanded
//! 3. the bundled default list
//! 4. common system dictionaries
//!
//! When none of those exist, a [`Locator`] built with
//! [`with_embedded_fallback`](Locator::with_embedded_fallback) resolves to
//! the copy of the default list compiled into the binary, so a relocated
//! executable still works.

use std::fmt;
use std::path::{Path, PathBuf};

/// Name of the bundled list used when nothing else is requested.
pub const DEFAULT_WORDFILE: &str = "common-en";

/// Overrides the bundled word-list directory.
pub const WORDLIST_DIR_ENV: &str = "WORDPASS_WORDLIST_DIR";

/// System dictionaries tried after the bundled lists, in order.
pub const SYSTEM_WORDFILES: &[&str] = &[
    "/usr/share/cracklib/cracklib-small",
    "/usr/share/dict/cracklib-small",
    "/usr/dict/words",
    "/usr/share/dict/words",
];

/// The default list, compiled in.
pub const EMBEDDED_WORDLIST: &str = include_str!("../../static/common-en");

/// Where a word list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A word file on disk.
    File(PathBuf),
    /// [`EMBEDDED_WORDLIST`].
    Embedded,
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::File(path) => write!(f, "{}", path.display()),
            WordSource::Embedded => write!(f, "embedded {DEFAULT_WORDFILE}"),
        }
    }
}

/// Ordered set of places a word file may live.
#[derive(Debug, Clone)]
pub struct Locator {
    bundled_dir: PathBuf,
    system_files: Vec<PathBuf>,
    embedded_fallback: bool,
}

impl Locator {
    /// Searches `bundled_dir` for named and default lists, then
    /// `system_files`. No embedded fallback.
    pub fn new(bundled_dir: impl Into<PathBuf>, system_files: Vec<PathBuf>) -> Self {
        Self {
            bundled_dir: bundled_dir.into(),
            system_files,
            embedded_fallback: false,
        }
    }

    /// Resolves to [`WordSource::Embedded`] when no candidate file exists.
    pub fn with_embedded_fallback(mut self) -> Self {
        self.embedded_fallback = true;
        self
    }

    /// Returns every candidate path for `name`, in lookup order.
    pub fn candidates(&self, name: Option<&str>) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(self.system_files.len() + 3);

        if let Some(name) = name {
            candidates.push(self.bundled_dir.join(name));
            candidates.push(expand_home(name));
        }

        candidates.push(self.bundled_dir.join(DEFAULT_WORDFILE));
        candidates.extend(self.system_files.iter().cloned());
        candidates
    }

    /// Returns the first candidate that is an existing regular file.
    pub fn locate(&self, name: Option<&str>) -> Option<PathBuf> {
        let found = self
            .candidates(name)
            .into_iter()
            .find(|candidate| candidate.is_file());

        match &found {
            Some(path) => tracing::debug!(path = %path.display(), "Located word file"),
            None => tracing::debug!(requested = ?name, "No word file found"),
        }

        found
    }

    /// Like [`locate`](Self::locate), falling back to the embedded list
    /// when enabled.
    pub fn resolve(&self, name: Option<&str>) -> Option<WordSource> {
        match self.locate(name) {
            Some(path) => Some(WordSource::File(path)),
            None if self.embedded_fallback => {
                tracing::debug!(requested = ?name, "Using embedded word list");
                Some(WordSource::Embedded)
            }
            None => None,
        }
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(
            default_bundled_dir(),
            SYSTEM_WORDFILES.iter().map(PathBuf::from).collect(),
        )
        .with_embedded_fallback()
    }
}

/// Directory holding the word lists shipped with the crate.
pub fn default_bundled_dir() -> PathBuf {
    match std::env::var_os(WORDLIST_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("static"),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without one, or when the home directory is unknown, are
/// returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Resolves a word source using the default search order.
pub fn locate_wordfile(name: Option<&str>) -> Option<WordSource> {
    Locator::default().resolve(name)
}
