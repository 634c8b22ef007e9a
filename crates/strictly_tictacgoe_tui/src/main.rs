//! Strictly Tic-Tac-Goe - terminal front end
//!
//! Arrow keys move the cursor, space places a mark, escape quits.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod settings;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::Path;
use strictly_tictacgoe::Game;
use strictly_tictacgoe::render::{outcome_message, render_board};
use tracing::{debug, error, info, instrument};

use app::App;
use cli::Cli;
use settings::Settings;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    init_tracing(settings.log_file())?;
    info!(size = *settings.size(), "Starting Strictly Tic-Tac-Goe");

    let game = Game::with_size(*settings.size())?;
    let mut app = App::new(game);

    let mut terminal = setup_terminal().context("Failed to open keyboard")?;
    let res = run_app(&mut terminal, &mut app, event::read);
    let restored = restore_terminal(&mut terminal);
    first_error(res, restored)?;

    let status = app.game().status();
    info!(%status, moves = app.game().state().counter(), "Game over");
    if let Some(message) = outcome_message(status) {
        println!("{}", render_board(app.game().state()));
        println!("{}", message);
    }

    Ok(())
}

/// Sends logs to a file so they don't interfere with the board.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Enters raw mode and the alternate screen.
#[instrument]
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => {
            debug!("Terminal ready");
            Ok(terminal)
        }
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Combines the game loop result with the terminal restore result.
///
/// A loop error wins over a restore error; the restore error is logged.
fn first_error(loop_result: Result<()>, restore_result: Result<()>) -> Result<()> {
    match (loop_result, restore_result) {
        (Err(err), restored) => {
            error!(error = ?err, "Game loop error");
            if let Err(restore_err) = restored {
                error!(error = ?restore_err, "Failed to restore terminal");
            }
            Err(err)
        }
        (Ok(()), Err(restore_err)) => {
            error!(error = ?restore_err, "Failed to restore terminal");
            Err(restore_err)
        }
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Draw, wait for one event, apply it, repeat until the game ends.
///
/// Waiting on `next_event` is the only place the loop blocks. Read errors
/// are shown to the player and the loop keeps waiting.
#[instrument(skip_all)]
fn run_app<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match next_event() {
            Ok(Event::Key(key)) => {
                app.handle_action(input::action_for_event(&key));
            }
            Ok(other) => debug!(event = ?other, "Non-key event ignored"),
            Err(e) => app.report_input_error(&e),
        }

        if app.is_finished() {
            info!(status = %app.game().status(), "Leaving game loop");
            return Ok(());
        }
    }
}
