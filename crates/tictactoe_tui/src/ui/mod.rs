//! Frame composition and mouse hit-testing.
//!
//! Hit-testing recomputes the same layout the renderer uses, so mouse
//! coordinates always resolve against what is actually on screen.

mod board;
mod history;

use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::Frame;

/// A resolved left-click target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// A board cell (0-8).
    Cell(usize),
    /// A move-list entry.
    Step(usize),
}

/// Draws the whole frame: board grid on the left, game info on the right.
pub fn draw(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let (board_pane, info_pane) = panes(f.area());
    board::render_board(f, board_pane, snapshot.board());
    history::render_info(f, info_pane, &snapshot, app);
}

/// Resolves a terminal coordinate to a click target, if any.
pub fn hit_test(area: Rect, column: u16, row: u16, history_len: usize) -> Option<Click> {
    let pos = Position::new(column, row);
    let (board_pane, info_pane) = panes(area);

    for (cell, rect) in board::cell_rects(board_pane).into_iter().enumerate() {
        if rect.contains(pos) {
            return Some(Click::Cell(cell));
        }
    }

    let moves = history::moves_area(info_pane);
    if moves.contains(pos) {
        let step = (row - moves.y) as usize;
        if step < history_len {
            return Some(Click::Step(step));
        }
    }

    None
}

fn panes(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(28)])
        .split(area);
    (cols[0], cols[1])
}
