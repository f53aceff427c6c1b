use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Candidate root-word list; `None` means the bundled list.
    pub word_list_path: Option<String>,
    /// Dictionary word list; `None` means the bundled dictionary.
    pub dictionary_path: Option<String>,
    /// Language tag for dictionary lookups.
    pub language: String,
    /// Whether the root word itself counts as a valid answer.
    pub allow_root_word: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let game = GameConfig {
            word_list_path: env::var("WORD_LIST_PATH").ok(),
            dictionary_path: env::var("DICTIONARY_PATH").ok(),
            language: env::var("LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            allow_root_word: env::var("ALLOW_ROOT_WORD")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("ALLOW_ROOT_WORD must be true or false")?,
        };

        Ok(Config { game })
    }
}
