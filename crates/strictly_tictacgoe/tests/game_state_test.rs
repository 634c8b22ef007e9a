//! Tests for cursor movement, placement and turn order.

use strictly_tictacgoe::{Cell, Cursor, Direction, GameState, Mark, current_turn_mark};

#[test]
fn test_create_yields_empty_board() {
    for size in 1..=9 {
        let state = GameState::new(size).unwrap();
        assert_eq!(state.counter(), 0);
        assert_eq!(state.size(), size);
        assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
        assert!(!state.is_full());
    }
}

#[test]
fn test_cursor_never_leaves_board() {
    let mut state = GameState::new(4).unwrap();
    for _ in 0..20 {
        state.move_cursor(Direction::Left);
        state.move_cursor(Direction::Up);
    }
    assert_eq!(state.cursor(), Cursor::new(0, 0));

    for _ in 0..20 {
        state.move_cursor(Direction::Right);
        state.move_cursor(Direction::Down);
        let cursor = state.cursor();
        assert!(cursor.row < 4 && cursor.col < 4);
    }
    assert_eq!(state.cursor(), Cursor::new(3, 3));
}

#[test]
fn test_placement_increments_counter_once() {
    let mut state = GameState::new(3).unwrap();
    assert!(state.place_mark());
    assert_eq!(state.counter(), 1);
    assert_eq!(state.board().get(0, 0), Some(Cell::PlayerA));

    // Second attempt on the same cell changes nothing.
    let snapshot = state.clone();
    assert!(!state.place_mark());
    assert_eq!(state, snapshot);
}

#[test]
fn test_turns_alternate_starting_with_a() {
    let mut state = GameState::new(3).unwrap();
    let mut placed = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            while state.cursor().col < col {
                state.move_cursor(Direction::Right);
            }
            while state.cursor().col > col {
                state.move_cursor(Direction::Left);
            }
            while state.cursor().row < row {
                state.move_cursor(Direction::Down);
            }
            let expected = current_turn_mark(state.counter());
            assert!(state.place_mark());
            placed.push(state.cell_at_cursor());
            assert_eq!(state.cell_at_cursor(), Cell::from(expected));
        }
    }

    for (i, cell) in placed.iter().enumerate() {
        let expected = if i % 2 == 0 { Cell::PlayerA } else { Cell::PlayerB };
        assert_eq!(*cell, expected);
    }
    assert!(state.is_full());
    assert_eq!(state.turn(), Mark::PlayerB);
}

#[test]
fn test_snapshot_serializes() {
    let mut state = GameState::new(2).unwrap();
    state.place_mark();
    state.move_cursor(Direction::Down);

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["counter"], 1);
    assert_eq!(json["cursor"]["row"], 1);
    assert_eq!(json["board"]["size"], 2);
    assert_eq!(json["board"]["cells"][0], "PlayerA");

    let restored: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_snapshot_with_short_board_is_rejected() {
    let json = serde_json::json!({
        "board": { "size": 3, "cells": ["Empty", "Empty"] },
        "cursor": { "row": 0, "col": 0 },
        "counter": 0
    });
    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_snapshot_with_cursor_off_board_is_rejected() {
    let json = serde_json::json!({
        "board": { "size": 2, "cells": ["Empty", "Empty", "Empty", "Empty"] },
        "cursor": { "row": 5, "col": 0 },
        "counter": 0
    });
    assert!(serde_json::from_value::<GameState>(json).is_err());
}

#[test]
fn test_snapshot_with_stale_counter_is_rejected() {
    let json = serde_json::json!({
        "board": { "size": 2, "cells": ["PlayerA", "Empty", "Empty", "Empty"] },
        "cursor": { "row": 0, "col": 0 },
        "counter": 0
    });
    assert!(serde_json::from_value::<GameState>(json).is_err());
}
