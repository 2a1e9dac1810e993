//! Sentence decks: one English sentence and its translation per line.

use tracing::debug;

use crate::models::{Card, Deck};

/// Parse a sentence list. The first line is a header and always ignored. Every
/// other non-blank line is split at its first comma into the English sentence
/// and its translation; any further commas belong to the translation. Lines
/// without a comma are dropped.
pub fn parse_sentences(text: &str) -> Deck {
    let cards = text
        .split('\n')
        .enumerate()
        .skip(1)
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match line.split_once(',') {
                Some((english, translation)) => {
                    Some(Card::new(english.trim(), translation.trim()))
                }
                None => {
                    debug!(line = idx + 1, "skipping sentence without a comma");
                    None
                }
            }
        })
        .collect::<Vec<_>>();

    Deck::new(cards)
}
