//! Status line and move-list rendering.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tictactoe_core::Snapshot;

/// Renders the info pane: status text above the clickable move list.
pub(super) fn render_info(f: &mut Frame, area: Rect, snapshot: &Snapshot, app: &App) {
    let (status_area, list_area) = split(area);

    let status = Paragraph::new(snapshot.status().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(status, status_area);

    let viewed = app.step_number();
    let items: Vec<ListItem> = snapshot
        .moves()
        .iter()
        .map(|entry| {
            let style = if entry.step() == viewed {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label().to_string()).style(style)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.cursor()));
    f.render_stateful_widget(list, list_area, &mut state);
}

/// Screen rect of the move list. Row `i` is history step `i`; the list
/// never scrolls (at most ten entries). Shared with hit-testing.
pub(super) fn moves_area(area: Rect) -> Rect {
    split(area).1
}

fn split(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    (rows[0], rows[1])
}
