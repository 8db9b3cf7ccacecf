//! One game as seen by the input layer.
//!
//! A session forwards input events into the board and stops accepting
//! marks once the board is won or drawn, until it is reset.

use crate::{BoardLayout, Point};
use noughts_tictactoe::{BoardState, GameStatus, Occupant, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// What happened to one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickOutcome {
    /// The cell was marked.
    Marked {
        /// Cell that received the mark.
        position: Position,
        /// Mark that was written.
        occupant: Occupant,
        /// Board status after the mark.
        status: GameStatus,
    },
    /// The cell already held a mark; nothing changed.
    Occupied(Position),
    /// The pointer was not over any cell.
    Missed,
    /// The game is over; input is ignored until reset.
    Frozen(GameStatus),
}

/// Board plus layout, driven one input event at a time.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: BoardState,
    layout: BoardLayout,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument(skip(layout))]
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            board: BoardState::new(),
            layout,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the layout used for hit-testing.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Current board status.
    pub fn status(&self) -> GameStatus {
        self.board.evaluate()
    }

    /// Handles a pointer click at `point`.
    #[instrument(skip(self))]
    pub fn click(&mut self, point: Point) -> ClickOutcome {
        let status = self.status();
        if status.is_over() {
            debug!(%status, "Click ignored, game over");
            return ClickOutcome::Frozen(status);
        }

        match self.layout.hit_test(point) {
            Some(position) => self.select(position),
            None => {
                debug!("Click missed the board");
                ClickOutcome::Missed
            }
        }
    }

    /// Handles a direct cell selection.
    #[instrument(skip(self), fields(turn = %self.board.current_turn()))]
    pub fn select(&mut self, position: Position) -> ClickOutcome {
        let status = self.status();
        if status.is_over() {
            debug!(%status, "Selection ignored, game over");
            return ClickOutcome::Frozen(status);
        }

        match self.board.mark_position(position) {
            Ok(occupant) => {
                let status = self.status();
                if status.is_over() {
                    info!(%status, "Game finished");
                }
                ClickOutcome::Marked {
                    position,
                    occupant,
                    status,
                }
            }
            // A typed position is always in range, so the only rejection is an occupied cell.
            Err(err) => {
                debug!(%position, error = %err, "Cell already occupied");
                ClickOutcome::Occupied(position)
            }
        }
    }

    /// Starts a new game on the same layout.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        info!("New game");
    }
}
