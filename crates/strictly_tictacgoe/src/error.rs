//! Error types for game construction.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of failure the game core can report.
///
/// Illegal cursor moves and placements on occupied cells are not errors;
/// they are ignored by [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// The requested game configuration cannot produce a playable board.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`GameErrorKind::InvalidConfiguration`] error.
    #[track_caller]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidConfiguration(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}
