//! Terminal front end.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::Intent;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_match::{DisplayController, MatchConfig, MatchController, TurnOutcome};
use tracing::{error, info, instrument, warn};

/// Runs the interactive match until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &MatchConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut terminal = enter_terminal()?;

    let game = MatchController::with_players(config.player1().as_str(), config.player2().as_str());
    let app = App::new(config.player1().as_str(), config.player2().as_str());
    let display = DisplayController::with_controller(game, app);

    let res = run_loop(&mut terminal, display);

    leave_terminal();
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal loop failed");
    }
    info!("Terminal UI closed");
    res
}

/// Switches to raw mode and the alternate screen.
///
/// Undoes both if any step fails so the shell is usable afterwards.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let setup = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    undo_on_error(setup, leave_terminal).context("Failed to set up terminal")
}

/// Runs `undo` if `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if let Err(e) = &result {
        error!(error = %e, "Terminal setup failed, restoring");
        undo();
    }
    result
}

/// Leaves the alternate screen and raw mode, logging any failure.
fn leave_terminal() {
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut display: DisplayController<App>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, display.surface()))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match display.surface_mut().handle_key(key) {
            Some(Intent::Quit) => return Ok(()),
            Some(Intent::Play(pos)) => {
                let outcome = display.cell_activated(pos.row(), pos.col())?;
                if let TurnOutcome::Win { line, .. } = outcome {
                    display.surface_mut().highlight(line);
                }
            }
            Some(Intent::Restart) => display.restart_requested(),
            Some(Intent::Start { name1, name2 }) => {
                display.start_requested(Some(&name1), Some(&name2));
            }
            None => {}
        }
    }
}
