//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::super::{BoardState, Occupant, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The n-th recorded move holds the starting player's mark when n is
/// even and the opponent's when odd, and the current turn is whoever
/// owes the next move.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardState> for AlternatingTurnInvariant {
    fn holds(board: &BoardState) -> bool {
        let owed = |moves: usize| {
            if moves % 2 == 0 {
                Player::STARTING
            } else {
                Player::STARTING.opponent()
            }
        };

        let history_alternates = board
            .history()
            .iter()
            .enumerate()
            .all(|(n, pos)| board.occupant_at(*pos) == Occupant::from(owed(n)));

        history_alternates && board.current_turn() == owed(board.history().len())
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_holds() {
        let board = BoardState::new();
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.current_turn(), Player::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut board = BoardState::new();
        for index in [0, 4, 8, 2, 6] {
            board.mark(index).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&board));
        assert_eq!(board.current_turn(), Player::X);
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut board = BoardState::new();
        board.mark(0).unwrap();
        board.place_raw(Position::TopLeft, Occupant::X);
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
