use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

/// Bundled English dictionary, one word per line.
const BUNDLED_WORDS: &str = include_str!("../../assets/dictionary.txt");

/// The dictionary could not produce a confident answer. Kept apart from a
/// plain "no" so a host never tells the player their word is invalid when
/// the truth is "unknown".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Capability that answers "is this a valid word in language L?".
///
/// The game session consumes exactly this predicate; a static word list, a
/// platform spellchecker or a remote service all fit behind it.
pub trait Dictionary {
    fn is_valid(&self, word: &str, language: &str) -> Result<bool, DictionaryError>;
}

/// Word-list-backed [`Dictionary`]: a set of lowercased words answering for
/// a single language tag.
pub struct WordListDictionary {
    words: HashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Load a dictionary from a one-word-per-line file.
    pub fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading dictionary {}", path.as_ref().display()))?;
        let dictionary = Self::parse(&content, language);

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// Split a newline-separated resource into a dictionary. Blank lines
    /// are skipped; entries are lowercased.
    pub fn parse(content: &str, language: &str) -> Self {
        let words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            words,
            language: language.to_string(),
        }
    }

    /// The dictionary embedded in the binary (English).
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_WORDS, "en")
    }

    /// Create an empty dictionary (for testing)
    pub fn empty(language: &str) -> Self {
        Self {
            words: HashSet::new(),
            language: language.to_string(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Language tag this dictionary answers for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        if language != self.language {
            return Err(DictionaryError::Unavailable {
                reason: format!("no word list for language {:?}", language),
            });
        }
        Ok(self.contains(word))
    }
}
