//! End-to-end game flows: word list -> session -> dictionary.

use rand::rngs::StdRng;
use rand::SeedableRng;

use unscramble::{
    ConfigurationError, DictionaryError, GameRules, GameSession, Rejection, SubmitOutcome,
    WordList, WordListDictionary,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// The worked example: root "encoding", then one word through every
/// outcome in order.
#[test]
fn test_encoding_transcript() {
    let list = WordList::parse("encoding").unwrap();
    let dictionary = WordListDictionary::parse("coding\ncode\nicon", "en");
    let mut session = GameSession::start(list.words(), &mut rng()).unwrap();

    assert_eq!(session.root_word(), "encoding");

    match session.submit("coding", &dictionary).unwrap() {
        SubmitOutcome::Accepted(accepted) => {
            assert_eq!(accepted.word, "coding");
            assert_eq!(accepted.gained, 6);
            assert_eq!(accepted.total_score, 6);
        }
        other => panic!("expected acceptance, got {:?}", other),
    }
    assert_eq!(session.score(), 6);

    assert_eq!(
        session.submit("coding", &dictionary).unwrap(),
        SubmitOutcome::Rejected(Rejection::AlreadyUsed)
    );
    assert_eq!(
        session.submit("zebra", &dictionary).unwrap(),
        SubmitOutcome::Rejected(Rejection::NotConstructible)
    );
    assert_eq!(
        session.submit("cdoing", &dictionary).unwrap(),
        SubmitOutcome::Rejected(Rejection::NotAWord)
    );

    // Only the one acceptance went through
    assert_eq!(session.accepted_words(), ["coding"]);
    assert_eq!(session.score(), 6);
}

#[test]
fn test_score_is_sum_of_accepted_lengths() {
    let list = WordList::parse("encoding").unwrap();
    let dictionary = WordListDictionary::parse("coding\ncode\nicon\ndine\nnice", "en");
    let mut session = GameSession::start(list.words(), &mut rng()).unwrap();

    for word in ["code", "icon", "dine", "nice", "bogus", ""] {
        let _ = session.submit(word, &dictionary).unwrap();
    }

    let expected: u32 = session
        .accepted_words()
        .iter()
        .map(|word| word.chars().count() as u32)
        .sum();
    assert_eq!(session.score(), expected);
    assert_eq!(session.accepted_words(), ["nice", "dine", "icon", "code"]);
}

#[test]
fn test_restart_rolls_a_fresh_session() {
    let list = WordList::parse("encoding\nnotebook\nmountain").unwrap();
    let dictionary = WordListDictionary::bundled();
    let mut rng = rng();
    let mut session = GameSession::start(list.words(), &mut rng).unwrap();

    let root = session.root_word().to_string();
    assert!(list.words().contains(&root));

    session.restart(list.words(), &mut rng).unwrap();
    assert_eq!(session.score(), 0);
    assert!(session.accepted_words().is_empty());
    assert!(list.words().contains(&session.root_word().to_string()));

    // A fresh session accepts a word the old one already used
    if session.root_word() == "encoding" {
        assert!(matches!(
            session.submit("coding", &dictionary).unwrap(),
            SubmitOutcome::Accepted(_)
        ));
    }
}

#[test]
fn test_bundled_resources_play_together() {
    let list = WordList::parse("encoding").unwrap();
    let dictionary = WordListDictionary::bundled();
    let mut session = GameSession::start(list.words(), &mut rng()).unwrap();

    assert!(matches!(
        session.submit("coding", &dictionary).unwrap(),
        SubmitOutcome::Accepted(_)
    ));
    assert!(matches!(
        session.submit("dine", &dictionary).unwrap(),
        SubmitOutcome::Accepted(_)
    ));
    // "noon" is a real word but needs two o's
    assert_eq!(
        session.submit("noon", &dictionary).unwrap(),
        SubmitOutcome::Rejected(Rejection::NotConstructible)
    );
    assert_eq!(session.score(), 10);
}

#[test]
fn test_every_bundled_candidate_is_a_dictionary_word() {
    let dictionary = WordListDictionary::bundled();
    for word in WordList::bundled().words() {
        assert!(
            dictionary.contains(word),
            "bundled candidate {:?} missing from bundled dictionary",
            word
        );
    }
}

#[test]
fn test_language_mismatch_surfaces_as_unavailable() {
    let list = WordList::parse("encoding").unwrap();
    let dictionary = WordListDictionary::bundled();
    let rules = GameRules {
        language: "fr".to_string(),
        ..GameRules::default()
    };
    let mut session = GameSession::with_rules(list.words(), rules, &mut rng()).unwrap();

    let result = session.submit("coding", &dictionary);
    assert!(matches!(result, Err(DictionaryError::Unavailable { .. })));
    assert_eq!(session.score(), 0);
}

#[test]
fn test_empty_word_list_never_yields_a_placeholder_root() {
    assert!(matches!(
        WordList::parse("\n\n\n"),
        Err(ConfigurationError::EmptyWordList)
    ));
    assert!(matches!(
        GameSession::start(&[], &mut rng()),
        Err(ConfigurationError::EmptyWordList)
    ));
}
