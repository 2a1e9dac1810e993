//! Deck ingestion: locate the CSV for a language/mode pair, fetch it from the
//! configured source and parse it into cards.

mod sentences;
mod source;
mod vocab;

use tracing::{info, warn};

use crate::error::LoadError;
use crate::models::{Deck, Language, StudyMode};

pub use sentences::parse_sentences;
pub use source::{is_remote, source_for, DirectorySource, HttpSource, ResourceSource};
pub use vocab::parse_vocab;

/// File name of the deck for a language and mode, relative to the base.
pub fn resource_name(language: Language, mode: StudyMode) -> &'static str {
    match (language, mode) {
        (Language::Telugu, StudyMode::Vocab) => "telugu_words.csv",
        (Language::German, StudyMode::Vocab) => "german_words.csv",
        (Language::Telugu, StudyMode::Speak) => "sentences.csv",
        (Language::German, StudyMode::Speak) => "german_sentences.csv",
    }
}

/// Parse deck text with the rules for the given mode.
pub fn parse_deck(text: &str, mode: StudyMode) -> Result<Deck, LoadError> {
    match mode {
        StudyMode::Vocab => parse_vocab(text),
        StudyMode::Speak => Ok(parse_sentences(text)),
    }
}

/// Fetch and parse one deck.
pub fn load_deck(
    source: &dyn ResourceSource,
    language: Language,
    mode: StudyMode,
) -> Result<Deck, LoadError> {
    let name = resource_name(language, mode);
    let text = source.fetch(name)?;
    let deck = parse_deck(&text, mode)?;
    info!(
        language = language.slug(),
        resource = name,
        cards = deck.len(),
        "loaded deck"
    );
    Ok(deck)
}

/// Like [`load_deck`], but any failure collapses into an empty deck. The
/// error is logged; the user only ever sees the empty-deck message.
pub fn load_or_empty(source: &dyn ResourceSource, language: Language, mode: StudyMode) -> Deck {
    load_deck(source, language, mode).unwrap_or_else(|err| {
        warn!(
            language = language.slug(),
            resource = resource_name(language, mode),
            from = %source.describe(),
            error = %err,
            "deck could not be loaded"
        );
        Deck::empty()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::Card;

    struct FixedSource(HashMap<&'static str, &'static str>);

    impl ResourceSource for FixedSource {
        fn fetch(&self, name: &str) -> Result<String, LoadError> {
            self.0
                .get(name)
                .map(|text| text.to_string())
                .ok_or_else(|| LoadError::Status {
                    url: name.to_string(),
                    status: 404,
                })
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn resource_names_follow_language_and_mode() {
        assert_eq!(resource_name(Language::Telugu, StudyMode::Vocab), "telugu_words.csv");
        assert_eq!(resource_name(Language::German, StudyMode::Speak), "german_sentences.csv");
    }

    #[test]
    fn loads_the_matching_resource() {
        let source = FixedSource(HashMap::from([
            ("german_words.csv", "Word,Definition 1\nHaus,house\n"),
            ("german_sentences.csv", "English,German\nGood day,Guten Tag\n"),
        ]));

        let vocab = load_deck(&source, Language::German, StudyMode::Vocab).unwrap();
        assert_eq!(vocab.cards(), &[Card::new("house", "Haus")]);

        let speak = load_deck(&source, Language::German, StudyMode::Speak).unwrap();
        assert_eq!(speak.cards(), &[Card::new("Good day", "Guten Tag")]);
    }

    #[test]
    fn failures_become_empty_decks() {
        let source = FixedSource(HashMap::from([(
            "telugu_words.csv",
            "english,translation\nwater,neeru\n",
        )]));

        assert!(load_or_empty(&source, Language::Telugu, StudyMode::Vocab).is_empty());
        assert!(load_or_empty(&source, Language::Telugu, StudyMode::Speak).is_empty());
    }
}
