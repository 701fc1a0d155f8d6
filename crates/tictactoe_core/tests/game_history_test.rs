//! Tests for the game-state manager: move legality, history truncation,
//! and time travel.

use tictactoe_core::{GameState, Player, Square};

fn occupied(game: &GameState, cell: usize) -> Square {
    game.current_board().get(cell).expect("cell in range")
}

#[test]
fn test_new_game_starts_empty() {
    let game = GameState::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.step_number(), 0);
    assert!(game.x_is_next());
    assert!((0..9).all(|cell| game.current_board().is_empty(cell)));
}

#[test]
fn test_apply_move_places_mark_and_flips_turn() {
    let mut game = GameState::new();
    game.apply_move(4);

    assert_eq!(occupied(&game, 4), Square::Occupied(Player::X));
    assert_eq!(game.step_number(), 1);
    assert!(!game.x_is_next());

    game.apply_move(0);
    assert_eq!(occupied(&game, 0), Square::Occupied(Player::O));
    assert!(game.x_is_next());
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut game = GameState::new();
    game.apply_move(4);
    let before = game.clone();

    // O tries the same cell.
    game.apply_move(4);
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_cell_is_ignored() {
    let mut game = GameState::new();
    let before = game.clone();
    game.apply_move(9);
    assert_eq!(game, before);
}

#[test]
fn test_diagonal_win_scenario() {
    // X takes 0, 4, 8 (the main diagonal); O answers with 1 and 3.
    let mut game = GameState::new();
    for cell in [0, 1, 4, 3, 8] {
        game.apply_move(cell);
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.winner(), Some(Player::X));
    assert_eq!(snapshot.status(), "Winner: X");

    // Further moves are no-ops once the game is decided.
    let before = game.clone();
    game.apply_move(2);
    assert_eq!(game, before);
}

#[test]
fn test_jump_rewinds_view_without_discarding_history() {
    let mut game = GameState::new();
    for cell in [0, 4, 1, 3, 8] {
        game.apply_move(cell);
    }
    assert_eq!(game.history().len(), 6);

    game.jump_to(0);
    assert_eq!(game.step_number(), 0);
    assert!(game.x_is_next());
    assert!((0..9).all(|cell| game.current_board().is_empty(cell)));
    // All five moves are still in the history until a new move branches.
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_move_after_jump_truncates_future() {
    let mut game = GameState::new();
    for cell in [0, 4, 1, 3, 8] {
        game.apply_move(cell);
    }

    game.jump_to(2);
    game.apply_move(5);

    // History was cut to steps 0..=2 before the new move was appended.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step_number(), 3);
    // Step 2 is even (two moves played), so the branch move belongs to X.
    assert_eq!(occupied(&game, 5), Square::Occupied(Player::X));
    // The rewound-to board itself was not touched.
    assert!(game.history()[2].is_empty(5));
}

#[test]
fn test_jump_parity_controls_next_mark() {
    let mut game = GameState::new();
    for cell in [0, 4, 1] {
        game.apply_move(cell);
    }

    game.jump_to(1);
    assert!(!game.x_is_next());
    game.apply_move(8);
    assert_eq!(occupied(&game, 8), Square::Occupied(Player::O));
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut game = GameState::new();
    game.apply_move(0);
    game.apply_move(4);

    assert_eq!(game.snapshot(), game.snapshot());
}

#[test]
fn test_snapshot_move_labels() {
    let mut game = GameState::new();
    game.apply_move(0);
    game.apply_move(4);

    let snapshot = game.snapshot();
    let moves = snapshot.moves();
    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0].step(), 0);
    assert_eq!(moves[0].label(), "Go to game start");
    assert_eq!(moves[1].label(), "Go to move #1");
    assert_eq!(moves[2].label(), "Go to move #2");
}

#[test]
fn test_snapshot_status_reports_next_player() {
    let mut game = GameState::new();
    assert_eq!(game.snapshot().status(), "Next player: X");
    game.apply_move(0);
    assert_eq!(game.snapshot().status(), "Next player: O");
}

#[test]
fn test_full_board_without_winner_still_reports_next_player() {
    // X 0 O 1 X 2 / O 4 X 3 O 5 / X 7 O 6 X 8 fills the board with no
    // three-in-a-row. There is deliberately no draw status.
    let mut game = GameState::new();
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.apply_move(cell);
    }

    let snapshot = game.snapshot();
    assert!((0..9).all(|cell| !snapshot.board().is_empty(cell)));
    assert_eq!(snapshot.winner(), None);
    assert_eq!(snapshot.status(), "Next player: O");
}

#[test]
fn test_snapshot_board_tracks_viewed_step() {
    let mut game = GameState::new();
    game.apply_move(0);
    game.apply_move(4);

    game.jump_to(1);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.board().get(0), Some(Square::Occupied(Player::X)));
    assert!(snapshot.board().is_empty(4));
    // The move list still covers the whole history.
    assert_eq!(snapshot.moves().len(), 3);
}
