//! tictactoe_match - command-line front ends.

#![warn(missing_docs)]

mod cli;
mod console;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MatchArgs};
use console::{ConsoleSurface, parse_move};
use std::path::Path;
use tictactoe_match::{DisplayController, MatchConfig, MatchController};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui { args, log_file } => {
            let config = load_config(&args, log_file.as_deref())?;
            init_file_logging(config.log_file())?;
            tui::run_tui(&config)
        }
        Command::Script { args, moves } => {
            tracing_subscriber::fmt()
                .with_env_filter(default_filter())
                .with_writer(std::io::stderr)
                .init();
            let config = load_config(&args, None)?;
            run_script(&config, &moves)
        }
    }
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to a file so tracing output does not tear the terminal UI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(args: &MatchArgs, log_file: Option<&Path>) -> Result<MatchConfig> {
    let config = MatchConfig::load(args.config.as_deref())?.with_overrides(
        args.player1.as_deref(),
        args.player2.as_deref(),
        log_file,
    );
    debug!(?config, "Configuration resolved");
    Ok(config)
}

/// Plays `moves` in order against a console surface on stdout.
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_script(config: &MatchConfig, moves: &[String]) -> Result<()> {
    let (name1, name2) = (config.player1().as_str(), config.player2().as_str());
    let game = MatchController::with_players(name1, name2);
    let surface = ConsoleSurface::new(std::io::stdout());
    let mut session = DisplayController::with_controller(game, surface);
    session.start_requested(Some(name1), Some(name2));

    for text in moves {
        let (row, col) = parse_move(text).with_context(|| format!("Bad move {text:?}"))?;
        let outcome = session.cell_activated(row, col)?;
        debug!(?outcome, row, col, "Scripted move played");
    }

    let over = session.controller().is_over();
    info!(over, "Script finished");
    Ok(())
}
