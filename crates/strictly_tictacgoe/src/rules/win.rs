//! Win detection by signed line scoring.
//!
//! Cells score `-1` for player A, `0` when empty and `+1` for player B. A
//! line of length `L` belongs to one player exactly when its sum reaches
//! `-L` or `+L`; any gap or mixed mark pulls the sum strictly inside.

use crate::types::{Board, Cell};
use tracing::{instrument, trace};

/// Sums the scores of a line of cells.
pub fn line_score(cells: impl IntoIterator<Item = Cell>) -> isize {
    cells.into_iter().map(Cell::score).sum()
}

/// Maps a line score to its owner.
///
/// Returns [`Cell::PlayerA`] for `-len`, [`Cell::PlayerB`] for `+len` and
/// [`Cell::Empty`] for everything else.
pub fn winner_from_score(len: usize, score: isize) -> Cell {
    let len = len as isize;
    if score < 0 && score == -len {
        return Cell::PlayerA;
    }
    if score > 0 && score == len {
        return Cell::PlayerB;
    }
    Cell::Empty
}

fn line_winner(len: usize, cells: impl IntoIterator<Item = Cell>) -> Cell {
    winner_from_score(len, line_score(cells))
}

/// Finds the owner of a completed line, or [`Cell::Empty`].
///
/// Row `i` is checked before column `i`, index by index. On odd-sized boards
/// the main diagonal is checked last. The anti-diagonal never wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winner(board: &Board) -> Cell {
    let size = board.size();

    for i in 0..size {
        let winner = line_winner(size, board.row(i).iter().copied());
        if winner != Cell::Empty {
            trace!(row = i, ?winner, "Row completed");
            return winner;
        }

        let winner = line_winner(size, board.column(i));
        if winner != Cell::Empty {
            trace!(column = i, ?winner, "Column completed");
            return winner;
        }
    }

    if size % 2 != 0 {
        let winner = line_winner(size, board.main_diagonal());
        if winner != Cell::Empty {
            trace!(?winner, "Main diagonal completed");
            return winner;
        }
    }

    Cell::Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell::{Empty as E, PlayerA as X, PlayerB as O};
    use crate::types::Mark;

    #[test]
    fn test_no_winner_empty_board() {
        for size in 1..=6 {
            let board = Board::new(size).unwrap();
            assert_eq!(find_winner(&board), Cell::Empty);
        }
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows(&[[X, X, X], [E, E, E], [E, E, E]]).unwrap();
        assert_eq!(find_winner(&board), Cell::PlayerA);
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows(&[[E, O, X], [E, O, X], [X, O, E]]).unwrap();
        assert_eq!(find_winner(&board), Cell::PlayerB);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::from_rows(&[[O, X, E], [E, O, X], [E, E, O]]).unwrap();
        assert_eq!(find_winner(&board), Cell::PlayerB);
    }

    #[test]
    fn test_anti_diagonal_does_not_win() {
        let board = Board::from_rows(&[[E, O, X], [E, X, O], [X, E, E]]).unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);

        let board = Board::from_rows(&[
            [E, E, E, E, O],
            [E, E, E, O, E],
            [E, E, O, E, E],
            [E, O, E, E, E],
            [O, E, E, E, E],
        ])
        .unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);
    }

    #[test]
    fn test_last_column_still_wins() {
        let board = Board::from_rows(&[[E, O, X], [E, O, X], [O, E, X]]).unwrap();
        assert_eq!(find_winner(&board), Cell::PlayerA);
    }

    #[test]
    fn test_even_diagonal_ignored() {
        let board = Board::from_rows(&[
            [X, E, E, E],
            [E, X, E, E],
            [E, E, X, E],
            [E, E, E, X],
        ])
        .unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);

        let board = Board::from_rows(&[
            [E, E, E, O],
            [E, E, O, E],
            [E, O, E, E],
            [O, E, E, E],
        ])
        .unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);
    }

    #[test]
    fn test_even_row_still_wins() {
        let mut board = Board::new(4).unwrap();
        for col in 0..4 {
            board.place(2, col, Mark::PlayerB);
        }
        assert_eq!(find_winner(&board), Cell::PlayerB);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // Sums to +1 on a line of length 3; neither extreme.
        let board = Board::from_rows(&[[O, O, X], [E, E, E], [E, E, E]]).unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1).unwrap();
        assert_eq!(find_winner(&board), Cell::Empty);
        board.place(0, 0, Mark::PlayerA);
        assert_eq!(find_winner(&board), Cell::PlayerA);
    }

    #[test]
    fn test_winner_from_score_extremes_only() {
        assert_eq!(winner_from_score(5, -5), Cell::PlayerA);
        assert_eq!(winner_from_score(5, 5), Cell::PlayerB);
        assert_eq!(winner_from_score(5, 4), Cell::Empty);
        assert_eq!(winner_from_score(5, -4), Cell::Empty);
        assert_eq!(winner_from_score(5, 0), Cell::Empty);
    }
}
