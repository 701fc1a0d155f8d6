//! Read model handed to the presentation layer.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One entry in the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    step: usize,
    label: String,
}

impl MoveDescriptor {
    pub(crate) fn new(step: usize, label: String) -> Self {
        Self { step, label }
    }

    /// Step this entry jumps to when activated.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Display label ("Go to game start" / "Go to move #N").
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Immutable view of the game for rendering.
///
/// The presentation layer reads one of these per frame and never touches
/// [`crate::GameState`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    winner: Option<Player>,
    status: String,
    moves: Vec<MoveDescriptor>,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        winner: Option<Player>,
        status: String,
        moves: Vec<MoveDescriptor>,
    ) -> Self {
        Self {
            board,
            winner,
            status,
            moves,
        }
    }

    /// Board at the step being viewed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Status line ("Winner: X" or "Next player: O").
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Ordered move list, one entry per history step.
    pub fn moves(&self) -> &[MoveDescriptor] {
        &self.moves
    }
}
