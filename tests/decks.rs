use std::fs;

use langappa::loader::DirectorySource;
use langappa::{load_deck, load_or_empty, Card, DeckPhase, DeckSession, Language, StudyMode};

fn deck_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("german_words.csv"),
        "Word,Definition 1,Definition 2\n\
         Haus,house,home\n\
         \"Guten Tag\",\"hello, good day\",\n\
         Zitat,\"the \"\"quote\"\"\",\n\
         \n\
         kaputt\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("german_sentences.csv"),
        "English,German\nI am hungry,Ich habe Hunger\nSee you, soon,Bis bald\n",
    )
    .unwrap();
    fs::write(dir.path().join("telugu_words.csv"), "Word,Definition 1\n").unwrap();
    dir
}

#[test]
fn vocab_deck_from_directory() {
    let dir = deck_dir();
    let source = DirectorySource::new(dir.path());

    let deck = load_deck(&source, Language::German, StudyMode::Vocab).unwrap();
    assert_eq!(
        deck.cards(),
        &[
            Card::new("house", "Haus"),
            Card::new("hello, good day", "Guten Tag"),
            Card::new("the \"quote\"", "Zitat"),
        ]
    );
}

#[test]
fn sentence_deck_from_directory() {
    let dir = deck_dir();
    let source = DirectorySource::new(dir.path());

    let deck = load_deck(&source, Language::German, StudyMode::Speak).unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.cards()[1], Card::new("See you", "soon,Bis bald"));
}

#[test]
fn header_only_and_missing_files_are_empty() {
    let dir = deck_dir();
    let source = DirectorySource::new(dir.path());

    assert!(load_or_empty(&source, Language::Telugu, StudyMode::Vocab).is_empty());
    assert!(load_or_empty(&source, Language::Telugu, StudyMode::Speak).is_empty());
}

#[test]
fn session_walks_a_loaded_deck() {
    let dir = deck_dir();
    let source = DirectorySource::new(dir.path());
    let mut session = DeckSession::new(Language::German, StudyMode::Vocab);
    session.finish_loading(load_or_empty(&source, Language::German, StudyMode::Vocab));
    assert_eq!(session.phase(), DeckPhase::Ready);

    assert_eq!(session.visible_text(), Some("house"));
    session.flip();
    assert_eq!(session.visible_text(), Some("Haus"));

    session.prev();
    assert_eq!(session.current_index(), 2);
    assert_eq!(session.visible_text(), Some("the \"quote\""));

    for _ in 0..session.len() {
        session.next();
    }
    assert_eq!(session.current_index(), 2);
    assert_eq!(session.counter(), "3 / 3");
}
