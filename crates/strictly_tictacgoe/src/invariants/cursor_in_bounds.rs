//! Cursor invariant: the cursor always points at a cell on the board.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= row, col < size`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let cursor = state.cursor();
        cursor.row < state.size() && cursor.col < state.size()
    }

    fn description() -> &'static str {
        "Cursor stays within the board"
    }
}
