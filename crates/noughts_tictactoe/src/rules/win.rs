//! Win detection logic for tic-tac-toe.

use super::super::{BoardState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in scan order: rows, then columns, then diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three cells on this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            // Rows
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            // Columns
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            // Diagonals
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of the three cells on this line.
    pub fn indices(self) -> [usize; 3] {
        self.cells().map(Position::to_index)
    }

    /// Get label for this line (for display).
    pub fn label(&self) -> &'static str {
        match self {
            WinLine::TopRow => "Top row",
            WinLine::MiddleRow => "Middle row",
            WinLine::BottomRow => "Bottom row",
            WinLine::LeftColumn => "Left column",
            WinLine::CenterColumn => "Center column",
            WinLine::RightColumn => "Right column",
            WinLine::MainDiagonal => "Main diagonal",
            WinLine::AntiDiagonal => "Anti-diagonal",
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Finds the first completed line on the board.
///
/// Returns the line and the player holding all three of its cells,
/// or `None` if no line is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &BoardState) -> Option<(WinLine, Player)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells().map(|pos| board.occupant_at(pos));
        match a.player() {
            Some(player) if a == b && b == c => Some((line, player)),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_match_fixed_triples() {
        let expected = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        let actual: Vec<_> = WinLine::ALL.iter().map(|line| line.indices()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = BoardState::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = BoardState::new();
        // O: 0, 1, 2 ; X: 3, 4
        for index in [0, 3, 1, 4, 2] {
            board.mark(index).unwrap();
        }
        assert_eq!(winning_line(&board), Some((WinLine::TopRow, Player::O)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = BoardState::new();
        // O: 2, 4, 6 ; X: 0, 1
        for index in [2, 0, 4, 1, 6] {
            board.mark(index).unwrap();
        }
        assert_eq!(winning_line(&board), Some((WinLine::AntiDiagonal, Player::O)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = BoardState::new();
        // O: 0, 1 ; X: 8
        for index in [0, 8, 1] {
            board.mark(index).unwrap();
        }
        assert_eq!(winning_line(&board), None);
    }
}
