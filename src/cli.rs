use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Language, StudyMode};

#[derive(Debug, Parser)]
#[command(name = "langappa", about = "Flashcards for Telugu and German", version)]
pub struct Cli {
    /// Directory or http(s) URL holding the deck CSV files
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Config file (default: ~/.langappa/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file (default: ~/.langappa/langappa.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Start with this language selected
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Open this deck directly (needs --language)
    #[arg(long, value_enum, requires = "language")]
    pub mode: Option<StudyMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the cards of one deck, one `front<TAB>back` line each
    Show {
        #[arg(long, value_enum)]
        language: Language,
        #[arg(long, value_enum)]
        mode: StudyMode,
    },

    /// Convert a tab-separated word list into CSV
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
}
