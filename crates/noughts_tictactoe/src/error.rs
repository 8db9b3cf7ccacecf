//! Errors returned when marking a cell.

use super::Position;
use derive_more::{Display, Error};

/// Reason a mark was rejected.
///
/// Both kinds are recoverable: a rejected mark leaves the board and
/// the turn untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// The index does not name one of the nine cells.
    #[display("Cell index {index} is out of bounds (must be 0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: isize,
    },

    /// The cell already holds a mark.
    #[display("{position} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        position: Position,
    },
}
