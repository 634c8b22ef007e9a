//! Strictly Tic-Tac-Goe - N x N tic-tac-toe game logic
//!
//! Two players alternate placing marks on a square grid. A player wins by
//! owning an entire row or column, or, on odd-sized grids, the main
//! diagonal. A full grid with no such line is a draw.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`] scores `-1 / 0 / +1`, [`Board`] is the square grid
//! - **State**: [`GameState`] owns the board, cursor and move counter
//! - **Rules**: pure win and fullness checks over a [`Board`]
//! - **Game**: [`Game`] applies [`Action`]s and tracks the [`GameStatus`]
//! - **Render**: plain-text board layout for terminal front ends
//!
//! # Example
//!
//! ```
//! use strictly_tictacgoe::{Action, Direction, Game, GameStatus, Mark};
//!
//! # fn main() -> Result<(), strictly_tictacgoe::GameError> {
//! let mut game = Game::new(1)?;
//! game.apply(Action::Move(Direction::Right));
//! assert_eq!(game.apply(Action::PlaceMark), GameStatus::Won(Mark::PlayerA));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
pub mod render;
pub mod rules;
mod state;
mod types;

pub use action::{Action, Direction};
pub use error::{GameError, GameErrorKind};
pub use game::{Game, GameStatus};
pub use rules::find_winner;
pub use state::{Cursor, GameState, current_turn_mark};
pub use types::{Board, Cell, MAX_SIZE, Mark};
