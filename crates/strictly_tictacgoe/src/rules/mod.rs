//! Game rules for N x N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{find_winner, line_score, winner_from_score};
