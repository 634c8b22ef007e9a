//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictacgoe::render::{INSTRUCTIONS, cell_text, divider};
use strictly_tictacgoe::{Cell, GameState};

use crate::app::App;

/// Renders instructions, the board with cursor highlight, and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Instructions
            Constraint::Min(1), // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let help = Paragraph::new(INSTRUCTIONS).style(Style::default().fg(Color::Cyan));
    frame.render_widget(help, chunks[0]);

    let board = Paragraph::new(board_lines(app.game().state()));
    frame.render_widget(board, chunks[1]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Builds styled lines for the board, mirroring the plain-text layout.
fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let size = state.size();
    let cursor = state.cursor();
    let separator = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(size * 2);

    for (row, cells) in state.board().rows().enumerate() {
        let mut spans = Vec::with_capacity(size * 2);
        for (col, cell) in cells.iter().enumerate() {
            let selected = cursor.row == row && cursor.col == col;
            spans.push(Span::styled(cell_text(*cell, selected), cell_style(*cell, selected)));
            if col + 1 != size {
                spans.push(Span::styled("|", separator));
            }
        }
        lines.push(Line::from(spans));

        if row + 1 != size {
            lines.push(Line::from(Span::styled(divider(size), separator)));
        }
    }

    lines
}

fn cell_style(cell: Cell, selected: bool) -> Style {
    let base = match cell {
        Cell::Empty => Style::default(),
        Cell::PlayerA => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::PlayerB => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}
