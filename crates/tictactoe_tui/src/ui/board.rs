//! Tic-tac-toe board rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tictactoe_core::{Board, Player, Square};

/// Renders the 3x3 grid centered in `area`.
pub(super) fn render_board(f: &mut Frame, area: Rect, board: &Board) {
    let grid = center_rect(area, 40, 12);
    let rows = grid_rows(grid);
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = row_cols(row_area);
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
    for (cell, rect) in cell_rects(area).into_iter().enumerate() {
        render_square(f, rect, board, cell);
    }
}

/// Screen rects of the nine cells, in board order. Shared with hit-testing.
pub(super) fn cell_rects(area: Rect) -> [Rect; 9] {
    let grid = center_rect(area, 40, 12);
    let rows = grid_rows(grid);
    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_cols(row_area);
        cells[row * 3] = cols[0];
        cells[row * 3 + 1] = cols[2];
        cells[row * 3 + 2] = cols[4];
    }
    cells
}

fn grid_rows(grid: Rect) -> [Rect; 5] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(grid);
    [rows[0], rows[1], rows[2], rows[3], rows[4]]
}

fn row_cols(row: Rect) -> [Rect; 5] {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(row);
    [cols[0], cols[1], cols[2], cols[3], cols[4]]
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, cell: usize) {
    let square = board.get(cell).unwrap_or(Square::Empty);
    let (text, style) = match square {
        Square::Empty => (
            format!("{}", cell + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
