//! Board fullness.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::PlayerA);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        use crate::types::Cell::{PlayerA as X, PlayerB as O};
        let board = Board::from_rows(&[[X, O, X], [X, O, O], [O, X, X]]).unwrap();
        assert!(is_full(&board));
    }
}
