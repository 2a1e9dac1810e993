//! Rendering of the deck screen: header, the card itself and the position
//! counter. Nothing here mutates the session.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::deck::{DeckPhase, DeckSession};
use crate::models::{Face, StudyMode};

use super::helpers::vertically_centered;

const FLIP_HINT: &str = "(Space to flip)";

/// Header shown above the card, e.g. `Telugu Speak Mode`.
pub(crate) fn deck_title(session: &DeckSession) -> String {
    let language = session.language().display_name();
    match session.mode() {
        StudyMode::Vocab => format!("{language} Vocabulary"),
        StudyMode::Speak => format!("{language} Speak Mode"),
    }
}

/// Message replacing the card while nothing can be shown.
pub(crate) fn placeholder(session: &DeckSession) -> Option<String> {
    let noun = session.mode().noun();
    match session.phase() {
        DeckPhase::Loading => Some(match session.mode() {
            StudyMode::Vocab => format!("Loading {} vocab...", session.language().slug()),
            StudyMode::Speak => format!("Loading {} {noun}...", session.language().slug()),
        }),
        DeckPhase::Empty => Some(format!("No {noun} found.")),
        DeckPhase::Ready => None,
    }
}

pub(crate) fn draw_deck(frame: &mut Frame, area: Rect, session: &DeckSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        deck_title(session),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    if let Some(message) = placeholder(session) {
        let inner_height = chunks[1].height.saturating_sub(2);
        let paragraph = Paragraph::new(vertically_centered(
            vec![Line::from(message)],
            inner_height,
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    draw_card(frame, chunks[1], session);
    draw_controls(frame, chunks[2], session);
}

fn draw_card(frame: &mut Frame, area: Rect, session: &DeckSession) {
    let face = session.visible_face();
    let text = session.visible_text().unwrap_or_default().to_string();

    let (text_style, border_style, label) = match face {
        Face::Front => (
            Style::default().add_modifier(Modifier::BOLD),
            Style::default(),
            "Front",
        ),
        Face::Back => (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
            "Back",
        ),
    };

    let lines = vec![
        Line::from(Span::styled(text, text_style)),
        Line::from(""),
        Line::from(Span::styled(FLIP_HINT, Style::default().fg(Color::DarkGray))),
    ];
    let inner_height = area.height.saturating_sub(2);
    let card = Paragraph::new(vertically_centered(lines, inner_height))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        );
    frame.render_widget(card, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, session: &DeckSession) {
    let line = Line::from(vec![
        Span::raw("← Previous   "),
        Span::styled(
            session.counter(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Next →"),
    ]);
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, area);
}
