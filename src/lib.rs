//! Word-unscramble game engine: a root word is drawn at random from a
//! candidate list, and submissions are accepted when they are new, can be
//! spelled from the root word's letters, and pass a dictionary check.
//!
//! The library is UI-independent; the `unscramble` binary is one host.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod wordlist;

pub use config::Config;
pub use dictionary::{Dictionary, DictionaryError, WordListDictionary};
pub use game::session::{AcceptedWord, GameRules, GameSession, Rejection, SubmitOutcome};
pub use game::validator::{can_be_created, normalize};
pub use wordlist::{ConfigurationError, WordList};
