//! Vocabulary decks: quote-aware CSV rows mapped through the header.

use tracing::debug;

use crate::error::LoadError;
use crate::models::{Card, Deck};

/// Header naming the target-language word.
const WORD_COLUMN: &str = "word";
/// Header naming the English definition.
const DEFINITION_COLUMN: &str = "definition 1";

/// Parse a vocabulary CSV. Columns are located through the header row, so the
/// files may carry extra columns in any order. The English definition becomes
/// the front of the card and the word its back.
///
/// Input with fewer than two non-blank lines yields an empty deck. A header
/// without the `Word` or `Definition 1` column is reported as
/// [`LoadError::MissingHeader`].
pub fn parse_vocab(text: &str) -> Result<Deck, LoadError> {
    let cleaned = text.trim_start_matches('\u{feff}').replace('\r', "");
    let lines: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return Ok(Deck::empty());
    };
    if rows.is_empty() {
        return Ok(Deck::empty());
    }

    let header = split_line(header);
    let word_idx = column_index(&header, WORD_COLUMN)
        .ok_or(LoadError::MissingHeader(WORD_COLUMN))?;
    let definition_idx = column_index(&header, DEFINITION_COLUMN)
        .ok_or(LoadError::MissingHeader(DEFINITION_COLUMN))?;
    let required = word_idx.max(definition_idx);

    let mut cards = Vec::with_capacity(rows.len());
    for (offset, line) in rows.iter().enumerate() {
        let fields = split_line(line);
        if fields.len() > required {
            cards.push(Card::new(
                fields[definition_idx].trim(),
                fields[word_idx].trim(),
            ));
        } else {
            debug!(line = offset + 2, "skipping vocab row with too few columns");
        }
    }

    Ok(Deck::new(cards))
}

/// Split one line at commas outside double quotes. Any `"` toggles quoting,
/// wherever it appears in a field; `""` inside quotes is a literal quote.
/// Quote characters themselves are dropped.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn column_index(header: &[String], name: &str) -> Option<usize> {
    header
        .iter()
        .position(|column| column.trim().eq_ignore_ascii_case(name))
}
