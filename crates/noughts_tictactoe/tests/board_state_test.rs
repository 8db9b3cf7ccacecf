//! Tests for board state, turn tracking and win evaluation.

use noughts_tictactoe::{BoardState, GameStatus, MarkError, Occupant, Player, Position, WinLine};

fn play(board: &mut BoardState, moves: &[isize]) {
    for &index in moves {
        board.mark(index).expect("Valid move");
    }
}

#[test]
fn test_reset_empties_every_cell() {
    let mut board = BoardState::new();
    play(&mut board, &[0, 4, 8]);
    board.reset();

    for index in 0..9 {
        assert_eq!(board.get(index), Some(Occupant::Empty));
    }
    assert_eq!(board.current_turn(), Player::O);
}

#[test]
fn test_first_mark_writes_o() {
    let mut board = BoardState::new();
    assert_eq!(board.current_turn(), Player::O);
    assert_eq!(board.mark(4), Ok(Occupant::O));
    assert_eq!(board.occupant_at(Position::Center), Occupant::O);
}

#[test]
fn test_mark_occupied_cell_keeps_turn() {
    let mut board = BoardState::new();
    board.mark(7).unwrap();
    assert_eq!(board.current_turn(), Player::X);

    let result = board.mark(7);
    assert_eq!(
        result,
        Err(MarkError::CellOccupied {
            position: Position::BottomCenter
        })
    );
    assert_eq!(board.current_turn(), Player::X);
}

#[test]
fn test_mark_out_of_range() {
    let mut board = BoardState::new();
    assert_eq!(board.mark(9), Err(MarkError::InvalidIndex { index: 9 }));
    assert_eq!(board.mark(-1), Err(MarkError::InvalidIndex { index: -1 }));
    assert_eq!(board.current_turn(), Player::O);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_x_wins_top_row() {
    let mut board = BoardState::new();
    // O opens away from the top row, X takes 0, 1, 2.
    play(&mut board, &[4, 0, 8, 1, 6, 2]);
    assert_eq!(board.evaluate(), GameStatus::Won(WinLine::TopRow, Player::X));
}

#[test]
fn test_o_wins_top_row_scenario() {
    let mut board = BoardState::new();
    play(&mut board, &[0, 3, 1, 4, 2]);
    assert_eq!(board.evaluate(), GameStatus::Won(WinLine::TopRow, Player::O));
    assert_eq!(WinLine::TopRow.indices(), [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut board = BoardState::new();
    play(&mut board, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(board.is_full());
    assert_eq!(board.evaluate(), GameStatus::Draw);
}

#[test]
fn test_reset_after_game_over() {
    let mut board = BoardState::new();
    play(&mut board, &[0, 3, 1, 4, 2]);
    assert!(board.evaluate().is_over());
    board.reset();
    assert_eq!(board.evaluate(), GameStatus::InProgress);
    assert!(!board.is_full());

    play(&mut board, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(board.evaluate(), GameStatus::Draw);
    board.reset();
    assert_eq!(board.evaluate(), GameStatus::InProgress);
    assert!(!board.is_full());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = BoardState::new();
    play(&mut board, &[0, 4]);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_status_serializes() {
    let status = GameStatus::Won(WinLine::MainDiagonal, Player::X);
    let json = serde_json::to_string(&status).unwrap();
    assert_eq!(json, r#"{"Won":["MainDiagonal","X"]}"#);
}
