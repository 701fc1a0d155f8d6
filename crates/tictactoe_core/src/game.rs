//! Game-state manager: board-snapshot history with time travel.

use crate::rules::check_winner;
use crate::snapshot::{MoveDescriptor, Snapshot};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: the single source of truth.
///
/// Owns the move history as a sequence of owned board snapshots plus a step
/// pointer into it. `history[0]` is always the all-empty board; the pointer
/// is always a valid index. Whose turn it is falls out of the pointer's
/// parity, so time travel never needs to patch a turn flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board snapshots, one per completed move plus the initial board.
    history: Vec<Board>,
    /// Index of the board currently shown (0-based).
    step_number: usize,
}

impl GameState {
    /// Creates a new game with an empty board and no moves.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// Returns the full history of board snapshots.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the current step number.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True if X plays next. X moves on even steps, O on odd.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Plays the current player's mark at `cell` (0-8).
    ///
    /// Illegal moves are silent no-ops, never errors: a cell that is
    /// already occupied (or out of range), or any move once the game has a
    /// winner, leaves the state untouched. A legal move made while viewing
    /// a past step first discards the now-stale future entries, so the
    /// history stays a single line of play.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn apply_move(&mut self, cell: usize) {
        let current = self.current_board();
        if check_winner(current).is_some() {
            debug!(cell, "ignoring move: game already won");
            return;
        }
        if !current.is_empty(cell) {
            debug!(cell, "ignoring move: square occupied");
            return;
        }

        self.history.truncate(self.step_number + 1);

        let mark = if self.x_is_next() { Player::X } else { Player::O };
        let mut board = self.history[self.step_number].clone();
        board.set(cell, Square::Occupied(mark));
        self.history.push(board);
        self.step_number = self.history.len() - 1;

        debug!(cell, %mark, step = self.step_number, "move applied");
    }

    /// Jumps the view to an existing step without altering history.
    ///
    /// `step` must be a valid index into the history. The presentation
    /// layer only offers steps it read from the latest snapshot, so an
    /// out-of-range step is a caller bug, not a runtime condition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len(), "step out of range");
        self.step_number = step;
    }

    /// Builds the immutable read model for the presentation layer.
    ///
    /// Pure read: repeated calls without an intervening mutation return
    /// equal snapshots. Note there is no draw case; a full board with no
    /// winner still reports the next player, exactly as the original game
    /// behaves.
    pub fn snapshot(&self) -> Snapshot {
        let board = self.current_board().clone();
        let winner = check_winner(&board);
        let status = match winner {
            Some(player) => format!("Winner: {player}"),
            None => {
                let next = if self.x_is_next() { Player::X } else { Player::O };
                format!("Next player: {next}")
            }
        };
        let moves = (0..self.history.len())
            .map(|step| {
                let label = if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{step}")
                };
                MoveDescriptor::new(step, label)
            })
            .collect();

        Snapshot::new(board, winner, status, moves)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
