use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use thiserror::Error;

/// Bundled candidate root words, one per line.
static BUNDLED_CANDIDATES: Lazy<WordList> = Lazy::new(|| {
    WordList::parse(include_str!("../assets/start.txt"))
        .expect("bundled start list has entries")
});

/// Fatal problems with the candidate root-word list. Session creation
/// surfaces these instead of falling back to a placeholder root.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("could not read word list {path}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("word list has no usable entries")]
    EmptyWordList,
}

/// The candidate root words a session can start from. Guaranteed non-empty
/// once constructed.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load candidates from a one-word-per-line file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let content =
            fs::read_to_string(&path).map_err(|source| ConfigurationError::Unreadable {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        let list = Self::parse(&content)?;

        tracing::info!("Loaded {} candidate root words", list.len());

        Ok(list)
    }

    /// Split a newline-separated resource into candidates. Entries are
    /// trimmed and lowercased; blank lines are skipped rather than kept as
    /// possible random picks.
    pub fn parse(content: &str) -> Result<Self, ConfigurationError> {
        let words: Vec<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(ConfigurationError::EmptyWordList);
        }

        Ok(Self { words })
    }

    /// The candidate list embedded in the binary.
    pub fn bundled() -> &'static WordList {
        &BUNDLED_CANDIDATES
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
