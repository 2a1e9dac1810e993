//! Ratatui front-end: language and mode menus plus the flashcard deck view.

mod app;
mod card;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
