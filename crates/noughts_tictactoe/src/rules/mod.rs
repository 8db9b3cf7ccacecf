//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be called every frame without side effects.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinLine, winning_line};

use super::{BoardState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current classification of the board.
///
/// Derived on every query, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row along the given line.
    Won(WinLine, Player),
    /// Game ended with a full board and no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(_, player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(line, player) => write!(f, "Player {} wins ({})", player, line),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the board.
///
/// The first winning line in [`WinLine::ALL`] order takes precedence over
/// any later one, then a full board is a draw.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn evaluate(board: &BoardState) -> GameStatus {
    if let Some((line, player)) = winning_line(board) {
        GameStatus::Won(line, player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
