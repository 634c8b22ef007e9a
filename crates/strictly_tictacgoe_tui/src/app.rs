//! Application state and logic.

use strictly_tictacgoe::{Action, Game, GameStatus};
use tracing::{debug, warn};

/// Main application state.
pub struct App {
    game: Game,
    status_message: String,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            status_message: String::new(),
        };
        app.refresh_status();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the game has reached a terminal status.
    pub fn is_finished(&self) -> bool {
        self.game.status().is_terminal()
    }

    /// Applies one decoded action to the game.
    pub fn handle_action(&mut self, action: Action) -> GameStatus {
        debug!(?action, "Handling action");
        let status = self.game.apply(action);
        self.refresh_status();
        status
    }

    /// Records a failed key read. The game keeps waiting for input.
    pub fn report_input_error(&mut self, error: &std::io::Error) {
        warn!(error = %error, "Error reading key press");
        self.status_message = format!("Error reading key press: {}", error);
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.game.status() {
            GameStatus::Playing => format!("Player {} to move", self.game.state().turn()),
            GameStatus::Won(mark) => format!("Player {} wins!", mark),
            GameStatus::Draw => "Game is tied!".to_string(),
            GameStatus::Aborted => "Game aborted".to_string(),
        };
    }
}
