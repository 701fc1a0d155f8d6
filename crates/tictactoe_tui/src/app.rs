//! Application state and logic.

use tictactoe_core::{GameState, Snapshot};
use tracing::debug;

/// Main application state: the single game plus the move-list cursor.
///
/// All mutation funnels through [`App::cell_clicked`] and
/// [`App::jump_to_step`]; rendering only ever sees a [`Snapshot`].
pub struct App {
    game: GameState,
    cursor: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: 0,
        }
    }

    /// Builds the current read model for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Step currently shown on the board.
    pub fn step_number(&self) -> usize {
        self.game.step_number()
    }

    /// Move-list row the keyboard cursor rests on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of move-list rows (one per history entry).
    pub fn history_len(&self) -> usize {
        self.game.history().len()
    }

    /// A board cell was clicked or its digit key pressed.
    pub fn cell_clicked(&mut self, cell: usize) {
        debug!(cell, "cell clicked");
        self.game.apply_move(cell);
        // A new move may have truncated the history; follow the tail.
        self.cursor = self.game.step_number();
    }

    /// A move-list entry was activated.
    pub fn jump_to_step(&mut self, step: usize) {
        debug!(step, "jump to step");
        self.game.jump_to(step);
        self.cursor = step;
    }

    /// Moves the cursor one row up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor one row down.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.history_len() {
            self.cursor += 1;
        }
    }

    /// Jumps to the entry under the cursor.
    pub fn activate_cursor(&mut self) {
        self.jump_to_step(self.cursor);
    }
}
