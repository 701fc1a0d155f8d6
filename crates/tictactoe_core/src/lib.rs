//! Tic-tac-toe game logic with snapshot history and time travel.
//!
//! The [`GameState`] aggregate owns a history of board snapshots and a step
//! pointer into that history. Moves append to the history; jumping to an
//! earlier step rewinds the visible board without discarding later entries
//! until a new move branches off from the rewound point.
//!
//! The presentation layer reads a [`Snapshot`] each frame and sends back
//! exactly two events: a cell click ([`GameState::apply_move`]) and a
//! history jump ([`GameState::jump_to`]). It never mutates game state
//! directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod rules;
mod snapshot;
mod types;

pub use game::GameState;
pub use rules::check_winner;
pub use snapshot::{MoveDescriptor, Snapshot};
pub use types::{Board, Player, Square};
