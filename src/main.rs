//! Command-line entry point.
//!
//! Parses arguments, loads configuration, opens the journal file and then
//! either prints every entry (`jou show`) or runs the interactive session.
//!
//! # Event Loop
//!
//! ```text
//! draw → poll (100 ms) → map_key → Session::dispatch → draw …
//! ```
//!
//! One key press is processed completely, store calls included, before the
//! next one is read. The terminal is restored on every exit path.

use clap::{Parser, Subcommand};
use crossterm::event::{self, Event as TermEvent};
use jou::app::{map_key, Flow, Session};
use jou::storage::JsonStore;
use jou::ui::terminal::{init_terminal, restore_terminal, Term};
use jou::{initialize, observability, Config, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Terminal poll timeout keeping the draw loop responsive.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "jou", version, about = "A commandline journaling tool")]
struct Cli {
    /// Configuration file (default: <config dir>/jou/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Journal file, overriding `store_path` from the configuration
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show all journal entries, newest first
    Show,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jou: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(store) = cli.store {
        config.store_path = Some(store);
    }

    observability::init_tracing(&config);
    tracing::debug!(store_path = ?config.store_path(), "starting");

    let store = match JsonStore::open(config.store_path()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to open journal");
            eprintln!("jou: failed to open journal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Some(Command::Show) => jou::ui::listing::write_entries(&store, &mut std::io::stdout().lock()),
        None => run_interactive(&config, store),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("jou: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Sets up the terminal, runs the session and restores the terminal.
fn run_interactive(config: &Config, store: JsonStore) -> Result<()> {
    let mut session = Session::new(initialize(config), store);
    let mut terminal = init_terminal()?;

    let outcome = event_loop(&mut terminal, &mut session);
    let restored = restore_terminal(&mut terminal);

    outcome.and(restored)
}

fn event_loop(terminal: &mut Term, session: &mut Session<JsonStore>) -> Result<()> {
    loop {
        terminal.draw(|frame| jou::ui::render(session.state(), frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let TermEvent::Key(key) = event::read()? else {
            continue;
        };

        let Some(event) = map_key(session.state().view, key) else {
            continue;
        };

        if session.dispatch(event) == Flow::Quit {
            tracing::debug!("session finished");
            return Ok(());
        }
    }
}
