use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::validator::{can_be_created, normalize};
use crate::wordlist::ConfigurationError;

/// Per-session rule switches.
#[derive(Debug, Clone, Serialize)]
pub struct GameRules {
    /// Whether the root word itself counts as a valid answer.
    pub allow_root_word: bool,
    /// Language tag handed to the dictionary on every lookup.
    pub language: String,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            allow_root_word: false,
            language: "en".to_string(),
        }
    }
}

/// Why a submission was turned down. The checks run in a fixed order and
/// the first failing one is the single reported reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The word is already in the accepted list.
    #[error("word already used")]
    AlreadyUsed,
    /// The word's letters are not a sub-multiset of the root word's letters.
    #[error("word cannot be made from the root word")]
    NotConstructible,
    /// The dictionary answered a confident "no".
    #[error("not a recognized word")]
    NotAWord,
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedWord {
    pub word: String,
    /// Points this word was worth (its character count).
    pub gained: u32,
    /// Session score after accepting it.
    pub total_score: u32,
}

/// Result of running a submission through the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Accepted(AcceptedWord),
    /// Empty after normalization; nothing was validated, nothing changed.
    Ignored,
    Rejected(Rejection),
}

/// One play-through: a root word, the words accepted against it, the score.
///
/// The session is a plain owned value. Hosts read state through the
/// accessors and mutate it only through [`GameSession::submit`] and
/// [`GameSession::restart`]; a host that needs concurrent access wraps the
/// whole session in its own lock.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    root_word: String,
    /// Most-recent-first; grows only at the front, entries never removed.
    accepted_words: Vec<String>,
    score: u32,
    rules: GameRules,
}

impl GameSession {
    /// Start a session with default rules: the root word is a uniformly
    /// random pick from `candidates`.
    pub fn start<R: Rng + ?Sized>(
        candidates: &[String],
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        Self::with_rules(candidates, GameRules::default(), rng)
    }

    /// Start a session with explicit rules. An empty candidate list is a
    /// configuration error, never a silent fallback root.
    pub fn with_rules<R: Rng + ?Sized>(
        candidates: &[String],
        rules: GameRules,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let root_word = candidates
            .choose(rng)
            .ok_or(ConfigurationError::EmptyWordList)?;

        Ok(Self {
            root_word: root_word.to_lowercase(),
            accepted_words: Vec::new(),
            score: 0,
            rules,
        })
    }

    /// Discard all progress and re-roll the root word. Rules carry over.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        candidates: &[String],
        rng: &mut R,
    ) -> Result<(), ConfigurationError> {
        *self = Self::with_rules(candidates, self.rules.clone(), rng)?;
        Ok(())
    }

    /// Run one submission through the three checks: originality,
    /// derivability from the root letters, dictionary membership.
    ///
    /// State changes only when every check passes; a rejection or a
    /// dictionary failure leaves the session exactly as it was. A
    /// [`DictionaryError`] is surfaced as `Err`, never as
    /// [`Rejection::NotAWord`].
    pub fn submit(
        &mut self,
        raw_input: &str,
        dictionary: &dyn Dictionary,
    ) -> Result<SubmitOutcome, DictionaryError> {
        let answer = normalize(raw_input);
        if answer.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if !self.is_original(&answer) {
            return Ok(SubmitOutcome::Rejected(Rejection::AlreadyUsed));
        }

        if !self.is_constructible(&answer) {
            return Ok(SubmitOutcome::Rejected(Rejection::NotConstructible));
        }

        if !dictionary.is_valid(&answer, &self.rules.language)? {
            return Ok(SubmitOutcome::Rejected(Rejection::NotAWord));
        }

        let gained = answer.chars().count() as u32;
        self.score += gained;
        self.accepted_words.insert(0, answer.clone());

        Ok(SubmitOutcome::Accepted(AcceptedWord {
            word: answer,
            gained,
            total_score: self.score,
        }))
    }

    fn is_original(&self, answer: &str) -> bool {
        !self.accepted_words.iter().any(|word| word == answer)
    }

    fn is_constructible(&self, answer: &str) -> bool {
        if !self.rules.allow_root_word && answer == self.root_word {
            return false;
        }
        can_be_created(answer, &self.root_word)
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
