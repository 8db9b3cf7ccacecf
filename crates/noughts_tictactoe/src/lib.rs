//! Pure tic-tac-toe game logic.
//!
//! This crate owns the rules and nothing else: no windows, no drawing,
//! no input polling. A presentation layer maps its own input events to
//! a cell index, calls [`BoardState::mark`], and asks
//! [`BoardState::evaluate`] whether to freeze input.
//!
//! # Architecture
//!
//! - **Board**: nine cells, the current turn and the move history
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Invariants**: checkable properties of a board state
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{BoardState, GameStatus, Player, WinLine};
//!
//! let mut board = BoardState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     board.mark(index)?;
//! }
//! assert_eq!(board.evaluate(), GameStatus::Won(WinLine::TopRow, Player::O));
//! # Ok::<(), noughts_tictactoe::MarkError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{BoardState, Cell};
pub use error::MarkError;
pub use position::Position;
pub use rules::{GameStatus, WinLine, evaluate};
pub use types::{Occupant, Player, Walls};
