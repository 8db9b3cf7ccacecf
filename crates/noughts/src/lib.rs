//! Noughts library - headless front end for tic-tac-toe
//!
//! The game rules live in [`noughts_tictactoe`]. This crate is the
//! collaborator around them: it maps pointer locations to cells, keeps
//! one session per game, renders the board as text and drives a session
//! from line-oriented input.
//!
//! # Example
//!
//! ```
//! use noughts::{ClickOutcome, GameSession, Point};
//!
//! let mut session = GameSession::default();
//! let outcome = session.click(Point::new(240.0, 105.0));
//! assert!(matches!(outcome, ClickOutcome::Marked { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod layout;
pub mod render;
mod script;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, LayoutConfig};
pub use layout::{BoardLayout, Point, Rect};
pub use script::{CommandError, InputCommand, ScriptError, ScriptSummary, replay, run_script};
pub use session::{ClickOutcome, GameSession};
