//! Core domain types for N x N tic-tac-toe.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two marks a player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// First player, shown as `x`.
    PlayerA,
    /// Second player, shown as `o`.
    PlayerB,
}

impl Mark {
    /// Display symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::PlayerA => 'x',
            Mark::PlayerB => 'o',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
///
/// The discriminant is the cell's score: a line owned entirely by one
/// player sums to `-len` or `+len`, which is what win detection relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum Cell {
    /// Occupied by [`Mark::PlayerA`].
    PlayerA = -1,
    /// Unoccupied.
    #[default]
    Empty = 0,
    /// Occupied by [`Mark::PlayerB`].
    PlayerB = 1,
}

impl Cell {
    /// Signed score of this cell (`-1`, `0` or `+1`).
    pub fn score(self) -> isize {
        isize::from(self as i8)
    }

    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::PlayerA => Some(Mark::PlayerA),
            Cell::Empty => None,
            Cell::PlayerB => Some(Mark::PlayerB),
        }
    }

    /// Checks if the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Display symbol (`x`, `o`, or a space).
    pub fn symbol(self) -> char {
        self.mark().map_or(' ', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::PlayerA => Cell::PlayerA,
            Mark::PlayerB => Cell::PlayerB,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Largest supported grid size.
pub const MAX_SIZE: usize = 1000;

/// Square `n x n` board stored in row-major order.
///
/// Deserialized boards go through the same size checks as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::check_size(raw.size)?;
        if raw.cells.len() != raw.size * raw.size {
            return Err(GameError::invalid_configuration(format!(
                "board of size {} needs {} cells, got {}",
                raw.size,
                raw.size * raw.size,
                raw.cells.len()
            )));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// Fails with an invalid-configuration error when `size` is zero or
    /// larger than [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    fn check_size(size: usize) -> Result<(), GameError> {
        if size == 0 {
            return Err(GameError::invalid_configuration(
                "grid size must be at least 1",
            ));
        }
        if size > MAX_SIZE {
            return Err(GameError::invalid_configuration(format!(
                "grid size {} exceeds the maximum of {}",
                size, MAX_SIZE
            )));
        }
        Ok(())
    }

    /// Builds a board from explicit rows.
    ///
    /// Rows must be non-empty and square.
    #[instrument(skip(rows))]
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, GameError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(GameError::invalid_configuration(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    size
                )));
            }
            board.cells[row * size..(row + 1) * size].copy_from_slice(cells);
        }
        Ok(board)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Places `mark` at `(row, col)` if that cell is empty.
    ///
    /// Returns `false` (and changes nothing) when the cell is occupied or
    /// out of bounds.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let cell = &mut self.cells[row * self.size + col];
        if !cell.is_empty() {
            return false;
        }
        *cell = mark.into();
        true
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `row`.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Cells of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(col).step_by(self.size).copied()
    }

    /// Cells of the main diagonal, top-left to bottom-right.
    pub fn main_diagonal(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + i])
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        let cell = Cell::from(mark);
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
