//! Counter invariant: every successful placement is counted exactly once.

use super::Invariant;
use crate::GameState;

/// Invariant: the number of occupied cells equals the move counter.
///
/// Cells only ever go from empty to occupied, so a mismatch means a mark
/// was overwritten, removed, or written without advancing the turn.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().occupied() == state.counter()
    }

    fn description() -> &'static str {
        "Occupied cells match the move counter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_rejected_placement() {
        let mut state = GameState::new(3).unwrap();
        state.place_mark();
        state.place_mark();
        assert_eq!(state.counter(), 1);
        assert!(MarkCountInvariant::holds(&state));
    }
}
