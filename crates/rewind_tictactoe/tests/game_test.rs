//! History and time-travel behavior of the game engine.

use rewind_tictactoe::{Board, Game, Player, Position, Square, check_winner};

/// Plays the given squares in order, alternating from X.
fn play(indices: &[usize]) -> Game {
    let mut game = Game::new();
    for &index in indices {
        game.apply(Position::from_index(index).expect("valid square index"));
    }
    game
}

#[test]
fn test_new_game_has_single_unlabeled_start_entry() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.history()[0].label(), None);
    assert_eq!(game.to_move(), Player::X);
    assert!(game.win().is_none());
}

#[test]
fn test_turns_alternate_by_step_parity() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    game.apply(Position::Center);
    assert_eq!(game.to_move(), Player::O);
    game.apply(Position::TopLeft);
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
}

#[test]
fn test_move_on_occupied_square_is_ignored() {
    let mut game = Game::new();
    game.apply(Position::Center);
    let before = game.clone();

    game.apply(Position::Center);
    assert_eq!(game, before);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_moves_after_win_are_ignored() {
    // X takes the top row: X 0, O 3, X 1, O 4, X 2.
    let mut game = play(&[0, 3, 1, 4, 2]);
    assert!(game.win().is_some());
    let before = game.clone();

    game.apply(Position::BottomRight);
    assert_eq!(game, before);
}

#[test]
fn test_jump_does_not_mutate_history() {
    let mut game = play(&[4, 0, 8]);
    let recorded = game.history().to_vec();

    game.jump_to(1);
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.history(), recorded.as_slice());
    assert_eq!(game.to_move(), Player::O);

    // The viewed snapshot is the board as it was after the first move.
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert!(game.board().is_empty(Position::TopLeft));
}

#[test]
fn test_jump_past_end_is_ignored() {
    let mut game = play(&[4, 0]);
    game.jump_to(7);
    assert_eq!(game.current_step(), 2);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let mut game = play(&[4, 0, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2);
    game.apply(Position::BottomLeft);

    // Steps 3 and 4 are gone; the branch move is the new step 3.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    assert_eq!(game.history()[3].label(), Some("X: (0,2)"));
    assert!(game.board().is_empty(Position::BottomRight));
    assert!(game.board().is_empty(Position::TopRight));
}

#[test]
fn test_branching_before_a_win_discards_the_winning_future() {
    // X wins on the diagonal: X 0, O 1, X 4, O 2, X 8.
    let mut game = play(&[0, 1, 4, 2, 8]);
    assert!(game.win().is_some());

    game.jump_to(4);
    assert!(game.win().is_none(), "board before the winning move is live");

    game.apply(Position::MiddleLeft);
    assert_eq!(game.history().len(), 6);
    assert!(game.win().is_none());
    assert!(game.board().is_empty(Position::BottomRight));
}

#[test]
fn test_diagonal_win_reports_line() {
    let game = play(&[0, 1, 4, 2, 8]);
    let win = game.win().expect("X completed the main diagonal");
    assert_eq!(win.winner(), Player::X);
    assert_eq!(
        win.line(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
}

#[test]
fn test_interleaved_top_row_win() {
    // X 0, O 4, X 1, O 3, X 2 completes the top row.
    let game = play(&[0, 4, 1, 3, 2]);
    let win = game.win().expect("X completed the top row");
    assert_eq!(win.winner(), Player::X);
    assert_eq!(
        win.line(),
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_all_eight_triples_are_detected() {
    let triples: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for triple in triples {
        let mut board = Board::new();
        for index in triple {
            let pos = Position::from_index(index).expect("valid square index");
            board.set(pos, Square::Occupied(Player::O));
        }
        let win = check_winner(&board).expect("triple is complete");
        assert_eq!(win.winner(), Player::O);
        assert_eq!(win.line().map(Position::index), triple);
    }
}

#[test]
fn test_history_labels_record_coordinates() {
    let game = play(&[4, 0, 8]);
    let labels: Vec<Option<&str>> = game.history().iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec![None, Some("X: (1,1)"), Some("O: (0,0)"), Some("X: (2,2)")]
    );
}

#[test]
fn test_status_line_tracks_viewed_step() {
    let mut game = play(&[0, 1, 4, 2, 8]);
    assert_eq!(game.status_line(), "Winner: X");

    game.jump_to(1);
    assert_eq!(game.status_line(), "Next player: O");

    game.jump_to(0);
    assert_eq!(game.status_line(), "Next player: X");
}

#[test]
fn test_serde_round_trip_preserves_history() {
    let game = play(&[4, 0, 8, 2]);
    let json = serde_json::to_string(&game).expect("game serializes");
    let restored: Game = serde_json::from_str(&json).expect("game deserializes");
    assert_eq!(restored, game);
}
