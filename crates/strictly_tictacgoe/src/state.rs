//! Mutable game state: board, cursor and move counter.

use crate::action::Direction;
use crate::error::GameError;
use crate::invariants::{GameStateInvariants, InvariantSet};
use crate::rules::win::find_winner;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Returns the mark whose turn it is after `counter` successful placements.
///
/// Player A moves on even counts, player B on odd.
pub fn current_turn_mark(counter: usize) -> Mark {
    if counter % 2 == 0 {
        Mark::PlayerA
    } else {
        Mark::PlayerB
    }
}

/// Cursor position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Row index, top is 0.
    pub row: usize,
    /// Column index, left is 0.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Complete state of one game.
///
/// Owns its board exclusively. Nothing here touches the terminal, so the
/// whole game can be driven from tests. Deserialized snapshots must satisfy
/// [`GameStateInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    cursor: Cursor,
    counter: usize,
}

#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    cursor: Cursor,
    counter: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            cursor: raw.cursor,
            counter: raw.counter,
        };
        GameStateInvariants::check_all(&state).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            GameError::invalid_configuration(format!(
                "inconsistent game snapshot: {}",
                reasons.join("; ")
            ))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a game on an empty `size x size` board with the cursor at the
    /// top-left corner.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        debug!(size, "Created game state");
        Ok(Self {
            board,
            cursor: Cursor::default(),
            counter: 0,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board size `n`.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of successful placements so far.
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// The mark that will be placed next.
    pub fn turn(&self) -> Mark {
        current_turn_mark(self.counter)
    }

    /// The cell under the cursor.
    pub fn cell_at_cursor(&self) -> Cell {
        self.board
            .get(self.cursor.row, self.cursor.col)
            .unwrap_or(Cell::Empty)
    }

    /// Moves the cursor one cell, ignoring moves that would leave the board.
    #[instrument(skip(self), fields(row = self.cursor.row, col = self.cursor.col))]
    pub fn move_cursor(&mut self, direction: Direction) {
        let last = self.size() - 1;
        let cursor = &mut self.cursor;
        match direction {
            Direction::Up if cursor.row > 0 => cursor.row -= 1,
            Direction::Down if cursor.row < last => cursor.row += 1,
            Direction::Left if cursor.col > 0 => cursor.col -= 1,
            Direction::Right if cursor.col < last => cursor.col += 1,
            _ => return,
        }
        debug!(row = cursor.row, col = cursor.col, "Cursor moved");
    }

    /// Places the current player's mark under the cursor.
    ///
    /// Returns `true` and advances the turn when the cell was empty. An
    /// occupied cell is left alone and `false` is returned.
    #[instrument(skip(self), fields(row = self.cursor.row, col = self.cursor.col, counter = self.counter))]
    pub fn place_mark(&mut self) -> bool {
        let mark = self.turn();
        if !self.board.place(self.cursor.row, self.cursor.col, mark) {
            debug!("Cell occupied, placement ignored");
            return false;
        }
        self.counter += 1;
        debug!(%mark, counter = self.counter, "Mark placed");

        debug_assert!(
            GameStateInvariants::check_all(self).is_ok(),
            "game state invariants violated after placement"
        );

        true
    }

    /// True once every cell has been claimed.
    pub fn is_full(&self) -> bool {
        self.counter == self.board.cells().len()
    }

    /// The owner of a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        find_winner(&self.board).mark()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
