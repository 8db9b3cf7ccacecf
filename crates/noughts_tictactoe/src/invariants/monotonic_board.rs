//! Monotonic board invariant: cells only fill, and only through moves.

use super::super::BoardState;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every occupied cell was written by exactly one recorded move.
///
/// Occupied count equals history length, history has no repeats, and
/// each history position is occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<BoardState> for MonotonicBoardInvariant {
    fn holds(board: &BoardState) -> bool {
        let history = board.history();
        let unique: HashSet<_> = history.iter().collect();

        unique.len() == history.len()
            && board.occupied_count() == history.len()
            && history
                .iter()
                .all(|pos| !board.occupant_at(*pos).is_empty())
    }

    fn description() -> &'static str {
        "Occupied cells match the move history"
    }
}
