//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the state manager and tests share one evaluator.

mod win;

pub use win::check_winner;
