//! Per-deck study session: the loaded cards, the current position and whether
//! the back of the card is showing.

use crate::models::{Card, Deck, Face, Language, StudyMode};

/// Coarse state of a session. `Ready` and `Empty` are terminal until the
/// session is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Loading,
    Ready,
    Empty,
}

/// State for one visit to a deck screen. It is created in the loading phase
/// when the user picks a mode and dropped when they back out.
#[derive(Debug, Clone)]
pub struct DeckSession {
    language: Language,
    mode: StudyMode,
    deck: Deck,
    current_index: usize,
    revealed: bool,
    loading: bool,
}

impl DeckSession {
    pub fn new(language: Language, mode: StudyMode) -> Self {
        Self {
            language,
            mode,
            deck: Deck::empty(),
            current_index: 0,
            revealed: false,
            loading: true,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn phase(&self) -> DeckPhase {
        if self.loading {
            DeckPhase::Loading
        } else if self.deck.is_empty() {
            DeckPhase::Empty
        } else {
            DeckPhase::Ready
        }
    }

    /// Store the parsed deck and leave the loading phase.
    pub fn finish_loading(&mut self, deck: Deck) {
        self.deck = deck;
        self.current_index = 0;
        self.revealed = false;
        self.loading = false;
    }

    /// Drop the current deck and go back to loading, e.g. after the language
    /// changed underneath the session.
    pub fn reset(&mut self, language: Language) {
        self.language = language;
        self.deck = Deck::empty();
        self.current_index = 0;
        self.revealed = false;
        self.loading = true;
    }

    pub fn flip(&mut self) {
        if self.phase() == DeckPhase::Ready {
            self.revealed = !self.revealed;
        }
    }

    pub fn next(&mut self) {
        if self.phase() != DeckPhase::Ready {
            return;
        }
        self.revealed = false;
        self.current_index = (self.current_index + 1) % self.deck.len();
    }

    pub fn prev(&mut self) {
        if self.phase() != DeckPhase::Ready {
            return;
        }
        let len = self.deck.len();
        self.revealed = false;
        self.current_index = (self.current_index + len - 1) % len;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current_card(&self) -> Option<&Card> {
        if self.loading {
            return None;
        }
        self.deck.get(self.current_index)
    }

    pub fn visible_face(&self) -> Face {
        if self.revealed {
            Face::Back
        } else {
            Face::Front
        }
    }

    /// Text on the face that is currently up, if a card is available.
    pub fn visible_text(&self) -> Option<&str> {
        let card = self.current_card()?;
        Some(match self.visible_face() {
            Face::Front => card.front.as_str(),
            Face::Back => card.back.as_str(),
        })
    }

    /// One-based position label such as `2 / 15`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.deck.len())
    }
}
