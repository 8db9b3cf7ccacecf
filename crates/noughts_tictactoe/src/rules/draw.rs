//! Draw detection logic for tic-tac-toe.

use super::super::BoardState;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &BoardState) -> bool {
    board.cells().iter().all(|cell| !cell.occupant().is_empty())
}
