//! Scenario tests for the game engine.

use tictactoe_engine::{Cell, GameEngine, GamePhase, MoveError, MoveOutcome, Player, Position};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&(row, col)| engine.apply_move(row, col).expect("Legal move"))
        .collect()
}

#[test]
fn test_top_row_win_on_fifth_move() {
    let mut engine = GameEngine::new();
    let outcomes = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Continue(Player::O),
            MoveOutcome::Continue(Player::X),
            MoveOutcome::Continue(Player::O),
            MoveOutcome::Continue(Player::X),
            MoveOutcome::Win(Player::X),
        ]
    );
    assert_eq!(engine.phase(), GamePhase::Won(Player::X));
    assert_eq!(engine.move_count(), 5);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = GameEngine::new();
    // X: (0,0) (0,1) (1,2) (2,0) (2,2)   O: (0,2) (1,0) (1,1) (2,1)
    let outcomes = play(
        &mut engine,
        &[
            (0, 0),
            (0, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
        ],
    );

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Tie));
    assert!(
        outcomes[..8]
            .iter()
            .all(|o| matches!(o, MoveOutcome::Continue(_)))
    );
    assert_eq!(engine.phase(), GamePhase::Tied);
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.move_count(), 9);
}

#[test]
fn test_repeat_move_is_rejected_without_side_effects() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(1, 1), Ok(MoveOutcome::Continue(Player::O)));
    let before = engine.clone();

    assert_eq!(
        engine.apply_move(1, 1),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(engine, before);
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_out_of_range_coordinates_rejected() {
    let mut engine = GameEngine::new();
    for (row, col) in [(3, 0), (0, 3), (7, 7), (usize::MAX, 1)] {
        assert_eq!(
            engine.apply_move(row, col),
            Err(MoveError::InvalidCoordinate { row, col })
        );
    }
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_moves_rejected_after_win_until_reset() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let finished = engine.clone();

    assert_eq!(engine.apply_move(2, 2), Err(MoveError::GameOver));
    assert_eq!(engine, finished);

    engine.reset();
    assert_eq!(engine.apply_move(2, 2), Ok(MoveOutcome::Continue(Player::O)));
}

#[test]
fn test_reset_from_every_phase() {
    let mut in_progress = GameEngine::new();
    play(&mut in_progress, &[(0, 0), (2, 2)]);

    let mut won = GameEngine::new();
    play(&mut won, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);

    let mut tied = GameEngine::new();
    play(
        &mut tied,
        &[
            (0, 0),
            (0, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (2, 2),
        ],
    );

    for mut engine in [in_progress, won, tied, GameEngine::new()] {
        engine.reset();
        assert_eq!(engine, GameEngine::new());
        assert_eq!(engine.phase(), GamePhase::InProgress);
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.move_count(), 0);
        assert!(engine.board().cells().iter().all(|c| *c == Cell::Empty));
    }
}

#[test]
fn test_queries_reflect_moves() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(2, 0), (0, 2)]);

    assert_eq!(engine.get_cell(2, 0), Ok(Cell::Occupied(Player::X)));
    assert_eq!(engine.get_cell(0, 2), Ok(Cell::Occupied(Player::O)));
    assert_eq!(engine.cell_at(Position::Center), Cell::Empty);
    assert_eq!(engine.current_player(), Player::X);
    assert_eq!(engine.available_moves().len(), 7);
    assert!(!engine.available_moves().contains(&Position::BottomLeft));
}

#[test]
fn test_diagonal_win_for_o() {
    let mut engine = GameEngine::new();
    let outcomes = play(&mut engine, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Win(Player::O)));
    assert_eq!(
        engine.winning_line(),
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );
}

#[test]
fn test_win_on_ninth_move_beats_tie() {
    let mut engine = GameEngine::new();
    // X completes the main diagonal with the last free cell
    let outcomes = play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ],
    );

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Win(Player::X)));
    assert_eq!(engine.phase(), GamePhase::Won(Player::X));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::SquareOccupied(Position::Center).to_string(),
        "Square Center is already taken"
    );
    assert_eq!(
        MoveError::InvalidCoordinate { row: 4, col: 1 }.to_string(),
        "Coordinate (4, 1) is off the board"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}

#[test]
fn test_engine_serializes_state() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0).unwrap();
    let json = serde_json::to_value(&engine).unwrap();

    assert_eq!(json["current_player"], "O");
    assert_eq!(json["move_count"], 1);
    assert_eq!(json["phase"], "InProgress");
    assert_eq!(json["board"]["cells"][0], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(json["board"]["cells"][1], "Empty");
}
