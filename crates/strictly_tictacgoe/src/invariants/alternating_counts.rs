//! Alternating turn invariant: player A moves first, then turns alternate.

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: player A has placed as many marks as player B, or one more.
pub struct AlternatingCountsInvariant;

impl Invariant<GameState> for AlternatingCountsInvariant {
    fn holds(state: &GameState) -> bool {
        let a = state.board().count(Mark::PlayerA);
        let b = state.board().count(Mark::PlayerB);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
