//! Game session: applies actions to a [`GameState`] and tracks the outcome.

use crate::action::Action;
use crate::error::GameError;
use crate::rules;
use crate::state::GameState;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a session stands.
///
/// Every variant except [`GameStatus::Playing`] is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the next action.
    Playing,
    /// A player completed a line.
    Won(Mark),
    /// Every cell is taken and nobody completed a line.
    Draw,
    /// The player left before the game ended.
    Aborted,
}

impl GameStatus {
    /// Returns true once no further action can change the status.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "Playing"),
            GameStatus::Won(mark) => write!(f, "Player {} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Aborted => write!(f, "Aborted"),
        }
    }
}

/// N x N tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
    status: GameStatus,
}

impl Game {
    /// Creates a new session on a `size x size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_state(GameState::new(size)?))
    }

    /// Creates a session from a signed size, as read from a command line or
    /// config file.
    ///
    /// Zero and negative sizes fail with an invalid-configuration error.
    #[instrument]
    pub fn with_size(size: i64) -> Result<Self, GameError> {
        let size = usize::try_from(size).map_err(|_| {
            GameError::invalid_configuration(format!(
                "grid size must be a positive integer, got {}",
                size
            ))
        })?;
        Self::new(size)
    }

    /// Wraps an existing state. The status is evaluated immediately.
    pub fn from_state(state: GameState) -> Self {
        let mut game = Self {
            state,
            status: GameStatus::Playing,
        };
        game.update_status();
        game
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies one action and returns the resulting status.
    ///
    /// Actions after the game has ended are ignored.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn apply(&mut self, action: Action) -> GameStatus {
        if self.status.is_terminal() {
            debug!("Game already finished, action ignored");
            return self.status;
        }

        match action {
            Action::Move(direction) => self.state.move_cursor(direction),
            Action::PlaceMark => {
                self.state.place_mark();
            }
            Action::Abort => {
                info!("Game aborted");
                self.status = GameStatus::Aborted;
                return self.status;
            }
            Action::Ignore => {}
        }

        self.update_status();
        self.status
    }

    /// Re-evaluates the status after the board may have changed.
    fn update_status(&mut self) {
        debug_assert_eq!(
            rules::is_full(self.state.board()),
            self.state.is_full(),
            "move counter disagrees with the board"
        );
        if let Some(winner) = self.state.winner() {
            info!(%winner, moves = self.state.counter(), "Line completed");
            self.status = GameStatus::Won(winner);
        } else if self.state.is_full() {
            info!(moves = self.state.counter(), "Board full without a winner");
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::error::GameErrorKind;

    fn play(game: &mut Game, actions: &[Action]) -> GameStatus {
        actions.iter().fold(game.status(), |_, action| game.apply(*action))
    }

    #[test]
    fn test_new_game_is_playing() {
        let game = Game::new(3).unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(!game.status().is_terminal());
    }

    #[test]
    fn test_with_size_rejects_non_positive() {
        for size in [0, -1, -3] {
            let err = Game::with_size(size).unwrap_err();
            assert!(matches!(err.kind(), GameErrorKind::InvalidConfiguration(_)));
        }
        assert_eq!(Game::with_size(4).unwrap().state().size(), 4);
    }

    #[test]
    fn test_abort_is_terminal_from_any_state() {
        let mut game = Game::new(3).unwrap();
        game.apply(Action::PlaceMark);
        assert_eq!(game.apply(Action::Abort), GameStatus::Aborted);
        assert_eq!(game.apply(Action::PlaceMark), GameStatus::Aborted);
        assert_eq!(game.state().counter(), 1);
    }

    #[test]
    fn test_ignore_changes_nothing() {
        let mut game = Game::new(3).unwrap();
        let before = game.clone();
        assert_eq!(game.apply(Action::Ignore), GameStatus::Playing);
        assert_eq!(game, before);
    }

    #[test]
    fn test_row_win() {
        use crate::action::Action::{Move, PlaceMark};
        use crate::action::Direction::{Down, Right, Up};

        let mut game = Game::new(3).unwrap();
        // A on row 0, B on row 1.
        let status = play(
            &mut game,
            &[
                PlaceMark,
                Move(Down),
                PlaceMark,
                Move(Up),
                Move(Right),
                PlaceMark,
                Move(Down),
                Move(Right),
                PlaceMark,
                Move(Up),
                PlaceMark,
            ],
        );
        assert_eq!(status, GameStatus::Won(Mark::PlayerA));
        assert_eq!(status.winner(), Some(Mark::PlayerA));
    }

    #[test]
    fn test_one_by_one_first_move_wins() {
        let mut game = Game::new(1).unwrap();
        assert_eq!(game.apply(Action::PlaceMark), GameStatus::Won(Mark::PlayerA));
    }

    #[test]
    fn test_finished_game_ignores_moves() {
        let mut game = Game::new(1).unwrap();
        game.apply(Action::PlaceMark);
        let before = game.clone();
        game.apply(Action::Move(Direction::Down));
        assert_eq!(game, before);
    }
}
