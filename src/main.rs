//! Binary entry point: resolve configuration, start logging, then either run
//! a one-shot command or hand control to the ratatui event loop.
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use langappa::cli::{Cli, Command};
use langappa::config::{Config, Overrides};
use langappa::convert::convert_file;
use langappa::{load_or_empty, logging, run_app, source_for, App};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(
        cli.config.as_deref(),
        Overrides {
            base: cli.base.clone(),
            log_file: cli.log_file.clone(),
        },
    )
    .context("failed to load configuration")?;
    logging::init(&config.log_file, &config.log_level)?;
    info!(base = %config.base, "starting langappa");

    match cli.command {
        Some(Command::Convert { input, output }) => {
            let rows = convert_file(&input, &output)?;
            println!("Wrote {rows} rows to {}.", output.display());
            Ok(())
        }
        Some(Command::Show { language, mode }) => {
            let source = source_for(&config.base).context("failed to set up deck source")?;
            let deck = load_or_empty(source.as_ref(), language, mode);
            let mut out = io::stdout().lock();
            if deck.is_empty() {
                writeln!(out, "No {} found.", mode.noun())?;
            }
            for card in deck.cards() {
                writeln!(out, "{}\t{}", card.front, card.back)?;
            }
            Ok(())
        }
        None => {
            let source = source_for(&config.base).context("failed to set up deck source")?;
            let mut app = App::with_selection(Arc::from(source), cli.language, cli.mode)?;
            run_app(&mut app)
        }
    }
}
