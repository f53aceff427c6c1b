use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unscramble::config::Config;
use unscramble::dictionary::{Dictionary, DictionaryError, WordListDictionary};
use unscramble::game::session::{GameRules, GameSession, Rejection, SubmitOutcome};
use unscramble::wordlist::WordList;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unscramble=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Load candidate root words
    let word_list = match &config.game.word_list_path {
        Some(path) => {
            WordList::load(path).with_context(|| format!("loading word list from {}", path))?
        }
        None => WordList::bundled().clone(),
    };
    tracing::debug!("{} candidate root words available", word_list.len());

    // Load dictionary
    let dictionary = match &config.game.dictionary_path {
        Some(path) => WordListDictionary::load(path, &config.game.language)
            .with_context(|| format!("loading dictionary from {}", path))?,
        None => {
            if config.game.language != "en" {
                tracing::warn!(
                    "Bundled dictionary is English; set DICTIONARY_PATH for language {:?}",
                    config.game.language
                );
            }
            WordListDictionary::bundled()
        }
    };

    let rules = GameRules {
        allow_root_word: config.game.allow_root_word,
        language: config.game.language.clone(),
    };

    let mut rng = rand::rng();
    let mut session = GameSession::with_rules(word_list.words(), rules, &mut rng)?;

    println!("Unscramble! Make words from the letters of the root word.");
    println!("Commands: words, state, restart, quit");
    print_round(&session);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("reading input")? == 0 {
            // EOF
            break;
        }

        match line.trim() {
            "quit" | "exit" => break,
            "restart" => {
                session.restart(word_list.words(), &mut rng)?;
                println!("New game.");
                print_round(&session);
            }
            "words" => {
                for word in session.accepted_words() {
                    println!("{}  {}", word.chars().count(), word);
                }
            }
            "state" => {
                println!("{}", serde_json::to_string_pretty(&session)?);
            }
            _ => play_word(&mut session, &line, &dictionary),
        }
    }

    println!("Final score: {}", session.score());

    Ok(())
}

fn print_round(session: &GameSession) {
    println!();
    println!("Root word: {}", session.root_word());
    println!("Score: {}", session.score());
}

fn play_word(session: &mut GameSession, input: &str, dictionary: &dyn Dictionary) {
    match session.submit(input, dictionary) {
        Ok(SubmitOutcome::Accepted(accepted)) => {
            println!(
                "+{}  {}  (score: {})",
                accepted.gained, accepted.word, accepted.total_score
            );
        }
        Ok(SubmitOutcome::Ignored) => {}
        Ok(SubmitOutcome::Rejected(rejection)) => {
            let (title, message) = rejection_copy(rejection, session.root_word());
            println!("{}: {}", title, message);
        }
        Err(DictionaryError::Unavailable { reason }) => {
            tracing::error!("Dictionary could not answer: {}", reason);
            println!("The dictionary is unavailable right now; your word was not judged.");
        }
    }
}

/// Player-facing copy for each rejection.
fn rejection_copy(rejection: Rejection, root_word: &str) -> (&'static str, String) {
    match rejection {
        Rejection::AlreadyUsed => ("Word already used", "Be more original".to_string()),
        Rejection::NotConstructible => (
            "Can't create from word",
            format!("This word cannot be created from '{}'", root_word),
        ),
        Rejection::NotAWord => (
            "Not a real word",
            "You can't just make words up!".to_string(),
        ),
    }
}
