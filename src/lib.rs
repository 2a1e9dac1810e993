//! Core library surface for the langappa flashcard TUI.
//!
//! The binary only wires these pieces together: configuration, logging, the
//! deck loader and the ratatui front-end. Keeping them in the library lets the
//! integration tests drive the loader and the deck session directly.
pub mod cli;
pub mod config;
pub mod convert;
pub mod deck;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod ui;

/// Loader entry points used by `main.rs` and the `show` command.
pub use loader::{load_deck, load_or_empty, source_for, ResourceSource};

/// Domain types manipulated by every layer.
pub use models::{Card, Deck, Face, Language, StudyMode};

pub use deck::{DeckPhase, DeckSession};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
