//! Application state, key handling and drawing for every screen.

use std::mem;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, error};

use crate::deck::{DeckPhase, DeckSession};
use crate::loader::{load_or_empty, ResourceSource};
use crate::models::{Deck, Language, StudyMode};

use super::card::draw_deck;
use super::helpers::{centered_rect, surface_error};
use super::screens::{LanguageMenu, ModeMenu};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

const ABOUT: &str = "There was a point in time where I was set on learning German through my \
own ways. I have reached a point where I am reasonably comfortable with the language but want \
to get better at it. Unable to find an app that suits my style, I decided to build my own.";

/// Which view is on screen. Only one exists at a time; leaving a deck drops
/// its session.
enum Screen {
    Languages(LanguageMenu),
    Modes(ModeMenu),
    Deck(DeckSession),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Result of a background load, tagged with what was requested so a stale
/// result cannot land in a different session.
struct LoadedDeck {
    language: Language,
    mode: StudyMode,
    deck: Deck,
}

/// Central application state shared across the TUI.
pub struct App {
    source: Arc<dyn ResourceSource>,
    screen: Screen,
    status: Option<StatusMessage>,
    pending: Option<Receiver<LoadedDeck>>,
}

impl App {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self {
            source,
            screen: Screen::Languages(LanguageMenu::new()),
            status: None,
            pending: None,
        }
    }

    /// Start on the mode menu for `language`, or straight inside a deck when
    /// `mode` is also given.
    pub fn with_selection(
        source: Arc<dyn ResourceSource>,
        language: Option<Language>,
        mode: Option<StudyMode>,
    ) -> Result<Self> {
        let mut app = Self::new(source);
        match (language, mode) {
            (Some(language), Some(mode)) => app.open_deck(language, mode)?,
            (Some(language), None) => app.screen = Screen::Modes(ModeMenu::new(language)),
            _ => {}
        }
        Ok(app)
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let screen = mem::replace(&mut self.screen, Screen::Languages(LanguageMenu::new()));

        self.screen = match screen {
            Screen::Languages(menu) => self.handle_language_key(code, menu, &mut exit)?,
            Screen::Modes(menu) => self.handle_mode_key(code, menu, &mut exit)?,
            Screen::Deck(session) => self.handle_deck_key(code, session, &mut exit)?,
        };

        Ok(exit)
    }

    fn handle_language_key(
        &mut self,
        code: KeyCode,
        mut menu: LanguageMenu,
        exit: &mut bool,
    ) -> Result<Screen> {
        let chosen = match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
                None
            }
            KeyCode::Up => {
                menu.menu.move_selection(-1);
                None
            }
            KeyCode::Down => {
                menu.menu.move_selection(1);
                None
            }
            KeyCode::Enter => Some(menu.current()),
            KeyCode::Char('t') | KeyCode::Char('T') => Some(Language::Telugu),
            KeyCode::Char('g') | KeyCode::Char('G') => Some(Language::German),
            _ => None,
        };

        Ok(match chosen {
            Some(language) => {
                self.clear_status();
                Screen::Modes(ModeMenu::new(language))
            }
            None => Screen::Languages(menu),
        })
    }

    fn handle_mode_key(
        &mut self,
        code: KeyCode,
        mut menu: ModeMenu,
        exit: &mut bool,
    ) -> Result<Screen> {
        let chosen = match code {
            KeyCode::Char('q') => {
                *exit = true;
                None
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                self.clear_status();
                return Ok(Screen::Languages(LanguageMenu::focused_on(menu.language)));
            }
            KeyCode::Up => {
                menu.menu.move_selection(-1);
                None
            }
            KeyCode::Down => {
                menu.menu.move_selection(1);
                None
            }
            KeyCode::Enter => Some(menu.current()),
            KeyCode::Char('v') | KeyCode::Char('V') => Some(StudyMode::Vocab),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(StudyMode::Speak),
            _ => None,
        };

        match chosen {
            Some(mode) => {
                self.clear_status();
                let session = self.start_session(menu.language, mode)?;
                Ok(Screen::Deck(session))
            }
            None => Ok(Screen::Modes(menu)),
        }
    }

    fn handle_deck_key(
        &mut self,
        code: KeyCode,
        mut session: DeckSession,
        exit: &mut bool,
    ) -> Result<Screen> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => {
                self.pending = None;
                self.clear_status();
                return Ok(Screen::Modes(ModeMenu::focused_on(
                    session.language(),
                    session.mode(),
                )));
            }
            KeyCode::Char(' ') | KeyCode::Enter => session.flip(),
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => session.next(),
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') => session.prev(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let other = match session.language() {
                    Language::Telugu => Language::German,
                    Language::German => Language::Telugu,
                };
                session.reset(other);
                self.clear_status();
                self.spawn_loader(other, session.mode())?;
            }
            _ => {}
        }
        Ok(Screen::Deck(session))
    }

    /// Hand a finished background load to the session that asked for it.
    /// Returns `true` when a deck arrived.
    pub fn poll_loading(&mut self) -> bool {
        let received = match &self.pending {
            Some(rx) => rx.try_recv(),
            None => return false,
        };

        let loaded = match received {
            Ok(loaded) => loaded,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                error!("deck loader exited without a result");
                self.pending = None;
                return false;
            }
        };
        self.pending = None;

        let Screen::Deck(session) = &mut self.screen else {
            debug!("discarding deck for a closed session");
            return false;
        };
        if session.phase() != DeckPhase::Loading
            || session.language() != loaded.language
            || session.mode() != loaded.mode
        {
            debug!("discarding stale deck");
            return false;
        }

        session.finish_loading(loaded.deck);
        if !session.is_empty() {
            let message = format!("Loaded {} {}.", session.len(), session.mode().noun());
            self.set_status(message, StatusKind::Info);
        }
        true
    }

    /// Whether a background load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn open_deck(&mut self, language: Language, mode: StudyMode) -> Result<()> {
        let session = self.start_session(language, mode)?;
        self.screen = Screen::Deck(session);
        Ok(())
    }

    fn start_session(&mut self, language: Language, mode: StudyMode) -> Result<DeckSession> {
        let mut session = DeckSession::new(language, mode);
        if let Err(err) = self.spawn_loader(language, mode) {
            // Without a loader the session would spin forever; show it empty.
            let message = surface_error(&err);
            error!(error = %message, "could not start deck loader");
            session.finish_loading(Deck::empty());
            self.set_status(message, StatusKind::Error);
        }
        Ok(session)
    }

    /// Fetch and parse a deck on a worker thread. Any previous receiver is
    /// replaced, so only the latest request can deliver.
    fn spawn_loader(&mut self, language: Language, mode: StudyMode) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        thread::Builder::new()
            .name("deck-loader".to_string())
            .spawn(move || {
                let deck = load_or_empty(source.as_ref(), language, mode);
                // The receiver is gone when the user already left the deck.
                let _ = tx.send(LoadedDeck {
                    language,
                    mode,
                    deck,
                });
            })
            .context("failed to spawn deck loader")?;
        self.pending = Some(rx);
        Ok(())
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Languages(menu) => self.draw_language_menu(frame, content_area, menu),
            Screen::Modes(menu) => self.draw_mode_menu(frame, content_area, menu),
            Screen::Deck(session) => draw_deck(frame, content_area, session),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_language_menu(&self, frame: &mut Frame, area: Rect, menu: &LanguageMenu) {
        let popup = centered_rect(60, 80, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(popup);

        let labels = Language::ALL.iter().map(|language| language.display_name());
        self.render_menu(frame, chunks[0], "Choose a language", labels, menu.menu.selected);

        let about = Paragraph::new(ABOUT)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("About"));
        frame.render_widget(about, chunks[1]);
    }

    fn draw_mode_menu(&self, frame: &mut Frame, area: Rect, menu: &ModeMenu) {
        let popup = centered_rect(60, 80, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(popup);

        let labels = StudyMode::ALL.iter().map(|mode| mode.display_name());
        let title = format!("{}: choose a mode", menu.language.display_name());
        self.render_menu(frame, chunks[0], &title, labels, menu.menu.selected);
    }

    fn render_menu<'a>(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        labels: impl Iterator<Item = &'a str>,
        selected: usize,
    ) {
        let items: Vec<ListItem> = labels.map(|label| ListItem::new(label.to_string())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions])
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.screen {
            Screen::Languages(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[t/g]", key_style),
                Span::raw(" Telugu/German   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::Modes(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[v/s]", key_style),
                Span::raw(" Vocabulary/Speaking   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back to Languages   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::Deck(_) => Line::from(vec![
                Span::styled("[Space]", key_style),
                Span::raw(" Flip   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Previous/Next   "),
                Span::styled("[l]", key_style),
                Span::raw(" Switch Language   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::error::LoadError;

    struct StaticSource;

    impl ResourceSource for StaticSource {
        fn fetch(&self, name: &str) -> Result<String, LoadError> {
            let text = match name {
                "telugu_words.csv" => "Word,Definition 1\nనీరు,water\nఇల్లు,house\nపుస్తకం,book\n",
                "german_sentences.csv" => "English,German\nGood morning,Guten Morgen\n",
                "german_words.csv" => "Word,Definition 1\n",
                _ => {
                    return Err(LoadError::Status {
                        url: name.to_string(),
                        status: 404,
                    })
                }
            };
            Ok(text.to_string())
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    fn app() -> App {
        App::new(Arc::new(StaticSource))
    }

    fn wait_for_deck(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !app.poll_loading() {
            assert!(Instant::now() < deadline, "deck never finished loading");
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key).unwrap());
        }
    }

    fn session(app: &App) -> &DeckSession {
        match &app.screen {
            Screen::Deck(session) => session,
            _ => panic!("not on the deck screen"),
        }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn menus_lead_into_a_loading_deck() {
        let mut app = app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);

        let current = session(&app);
        assert_eq!(current.language(), Language::Telugu);
        assert_eq!(current.mode(), StudyMode::Vocab);
        assert!(app.is_loading());

        wait_for_deck(&mut app);
        assert_eq!(session(&app).phase(), DeckPhase::Ready);
        assert_eq!(session(&app).len(), 3);
        assert!(!app.is_loading());
    }

    #[test]
    fn deck_keys_flip_and_navigate() {
        let mut app = App::with_selection(
            Arc::new(StaticSource),
            Some(Language::Telugu),
            Some(StudyMode::Vocab),
        )
        .unwrap();
        wait_for_deck(&mut app);

        press(&mut app, &[KeyCode::Char(' ')]);
        assert_eq!(session(&app).visible_text(), Some("నీరు"));

        press(&mut app, &[KeyCode::Left]);
        assert_eq!(session(&app).current_index(), 2);
        assert!(!session(&app).is_revealed());
        assert_eq!(session(&app).visible_text(), Some("book"));

        press(&mut app, &[KeyCode::Right, KeyCode::Char('n')]);
        assert_eq!(session(&app).current_index(), 1);
    }

    #[test]
    fn back_from_deck_returns_to_mode_menu() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('g'), KeyCode::Char('s')]);
        press(&mut app, &[KeyCode::Esc]);

        match &app.screen {
            Screen::Modes(menu) => {
                assert_eq!(menu.language, Language::German);
                assert_eq!(menu.current(), StudyMode::Speak);
            }
            _ => panic!("expected the mode menu"),
        }
        assert!(!app.is_loading());

        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.screen, Screen::Languages(_)));
    }

    #[test]
    fn quit_keys_report_exit() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());

        let mut app = App::with_selection(Arc::new(StaticSource), Some(Language::German), None)
            .unwrap();
        assert!(!app.handle_key(KeyCode::Esc).unwrap());
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }

    #[test]
    fn switching_language_reloads_the_deck() {
        let mut app = App::with_selection(
            Arc::new(StaticSource),
            Some(Language::Telugu),
            Some(StudyMode::Speak),
        )
        .unwrap();
        wait_for_deck(&mut app);
        assert_eq!(session(&app).phase(), DeckPhase::Empty);

        press(&mut app, &[KeyCode::Char('l')]);
        assert_eq!(session(&app).language(), Language::German);
        assert_eq!(session(&app).phase(), DeckPhase::Loading);

        wait_for_deck(&mut app);
        assert_eq!(session(&app).visible_text(), Some("Good morning"));
    }

    #[test]
    fn renders_card_and_counter() {
        let mut app = App::with_selection(
            Arc::new(StaticSource),
            Some(Language::Telugu),
            Some(StudyMode::Vocab),
        )
        .unwrap();
        wait_for_deck(&mut app);

        let screen = render(&app);
        assert!(screen.contains("Telugu Vocabulary"));
        assert!(screen.contains("water"));
        assert!(screen.contains("1 / 3"));
        assert!(screen.contains("(Space to flip)"));
    }

    #[test]
    fn renders_empty_deck_message() {
        let mut app = App::with_selection(
            Arc::new(StaticSource),
            Some(Language::German),
            Some(StudyMode::Vocab),
        )
        .unwrap();
        wait_for_deck(&mut app);
        assert!(render(&app).contains("No words found."));
    }

    #[test]
    fn renders_loading_message_before_the_deck_arrives() {
        let mut app = app();
        app.screen = Screen::Deck(DeckSession::new(Language::German, StudyMode::Speak));
        assert!(render(&app).contains("Loading german sentences..."));
    }

    #[test]
    fn renders_language_menu_with_about() {
        let screen = render(&app());
        assert!(screen.contains("Telugu"));
        assert!(screen.contains("German"));
        assert!(screen.contains("About"));
    }
}
