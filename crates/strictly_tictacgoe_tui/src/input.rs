//! Keyboard mapping: crossterm key events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use strictly_tictacgoe::{Action, Direction};

/// Maps a key to the action it triggers.
///
/// Arrows move the cursor, space places a mark, escape leaves the game.
/// Everything else is ignored.
pub fn action_for_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Char(' ') => Action::PlaceMark,
        KeyCode::Esc => Action::Abort,
        _ => Action::Ignore,
    }
}

/// Maps a full key event. Key releases and repeats are ignored so a single
/// press never counts twice.
pub fn action_for_event(event: &KeyEvent) -> Action {
    if event.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    action_for_key(event.code)
}
