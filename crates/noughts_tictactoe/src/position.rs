//! Named cells of the 3x3 board.

use super::{BoardState, MarkError, Walls};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// Grid strokes per cell, row-major.
const WALLS: [Walls; 9] = [
    Walls::SOUTH.union(Walls::EAST),
    Walls::SOUTH,
    Walls::WEST.union(Walls::SOUTH),
    Walls::SOUTH.union(Walls::EAST),
    Walls::empty(),
    Walls::WEST.union(Walls::SOUTH),
    Walls::EAST,
    Walls::NORTH,
    Walls::WEST,
];

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or number (0-8).
    ///
    /// Labels match case-insensitively, either in full or by a prefix
    /// that names exactly one cell (`bottom-r`, but not `top`).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        if let Some(pos) = Self::iter().find(|pos| pos.label().to_lowercase() == s_lower) {
            return Some(pos);
        }

        let mut prefixed = Self::iter().filter(|pos| pos.label().to_lowercase().starts_with(&s_lower));
        match (prefixed.next(), prefixed.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this cell, counted from the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this cell, counted from the left.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Grid strokes drawn around this cell.
    pub fn walls(self) -> Walls {
        WALLS[self.to_index()]
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &BoardState) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.occupant_at(*pos).is_empty())
            .collect()
    }
}

impl TryFrom<isize> for Position {
    type Error = MarkError;

    fn try_from(index: isize) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(MarkError::InvalidIndex { index })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
