//! Plain-text rendering of the board.
//!
//! Each cell is three characters wide: `[x]` under the cursor, ` x `
//! elsewhere. Cells are joined by `|` and rows by a line of dashes.

use crate::game::GameStatus;
use crate::state::GameState;
use crate::types::Cell;

/// Key help shown above the board.
pub const INSTRUCTIONS: &str = "Arrow: move cursor, Space: make move, ESC: exit";

/// Text for one cell.
pub fn cell_text(cell: Cell, selected: bool) -> String {
    if selected {
        format!("[{}]", cell)
    } else {
        format!(" {} ", cell)
    }
}

/// Horizontal divider between rows of a `size`-wide board.
pub fn divider(size: usize) -> String {
    "-".repeat(size * 4 - 1)
}

/// Renders row `row` of the board, bracketing the cursor cell.
pub fn render_row(state: &GameState, row: usize) -> String {
    let cursor = state.cursor();
    state
        .board()
        .row(row)
        .iter()
        .enumerate()
        .map(|(col, cell)| cell_text(*cell, cursor.row == row && cursor.col == col))
        .collect::<Vec<_>>()
        .join("|")
}

/// Renders the whole board, one text line per entry.
pub fn render_lines(state: &GameState) -> Vec<String> {
    let size = state.size();
    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        lines.push(render_row(state, row));
        if row + 1 != size {
            lines.push(divider(size));
        }
    }
    lines
}

/// Renders the whole board as a single string.
pub fn render_board(state: &GameState) -> String {
    render_lines(state).join("\n")
}

/// Message printed when the game ends, if the status calls for one.
pub fn outcome_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Won(mark) => Some(format!("We have a winner! {} wins!", mark)),
        GameStatus::Draw => Some("Game is tied! nobody wins!".to_string()),
        GameStatus::Playing | GameStatus::Aborted => None,
    }
}
