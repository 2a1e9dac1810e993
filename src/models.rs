//! Domain models shared by the loader, the deck state machine and the TUI.
//! These stay plain data holders so the other layers can focus on parsing and
//! presentation.

use std::fmt;

use clap::ValueEnum;

/// The languages a deck can be studied in. Each one maps to its own set of
/// CSV files under the deck base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Telugu,
    German,
}

impl Language {
    /// Every language in menu order.
    pub const ALL: [Language; 2] = [Language::Telugu, Language::German];

    /// Lowercase identifier used in resource names and loading messages.
    pub fn slug(self) -> &'static str {
        match self {
            Language::Telugu => "telugu",
            Language::German => "german",
        }
    }

    /// Capitalized name shown in menus and deck headers.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Telugu => "Telugu",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Which kind of cards a deck holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StudyMode {
    /// Single words with their definitions.
    Vocab,
    /// Whole sentences for speaking practice.
    Speak,
}

impl StudyMode {
    pub const ALL: [StudyMode; 2] = [StudyMode::Vocab, StudyMode::Speak];

    pub fn display_name(self) -> &'static str {
        match self {
            StudyMode::Vocab => "Vocabulary",
            StudyMode::Speak => "Speaking",
        }
    }

    /// Plural noun for the cards of this mode ("words", "sentences"). Used in
    /// the loading and empty-deck messages.
    pub fn noun(self) -> &'static str {
        match self {
            StudyMode::Vocab => "words",
            StudyMode::Speak => "sentences",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One flashcard. `front` is what the learner sees first, `back` is revealed
/// on flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Ordered collection of cards in file order. A deck never changes once it
/// has been loaded; only the session's position moves over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Which side of the current card is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}
