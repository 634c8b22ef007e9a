//! Input actions consumed by a game session.
//!
//! Actions are the only way a front end talks to the game. Keyboard
//! handling lives in the terminal crate, which maps keys onto these.

use serde::{Deserialize, Serialize};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

/// A single input event, already decoded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the cursor one cell.
    Move(Direction),
    /// Place the current player's mark under the cursor.
    PlaceMark,
    /// Leave the game immediately.
    Abort,
    /// Any other input. Has no effect.
    Ignore,
}
