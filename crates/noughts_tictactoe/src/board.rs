//! Board state: nine cells, the current turn and the move history.

use super::invariants::{BoardInvariants, InvariantSet};
use super::rules::{self, GameStatus};
use super::{MarkError, Occupant, Player, Position, Walls};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One of the nine board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Position,
    occupant: Occupant,
}

impl Cell {
    /// Returns where on the board this cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the mark in this cell.
    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    /// Grid strokes drawn around this cell.
    pub fn walls(&self) -> Walls {
        self.position.walls()
    }
}

/// Complete mutable state of one game.
///
/// Cells are only written through [`BoardState::mark`], so the number of
/// occupied cells never decreases until [`BoardState::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Player whose mark the next successful move writes.
    turn: Player,
    /// Positions marked since the last reset, in order.
    history: Vec<Position>,
}

impl BoardState {
    /// Creates an empty board with the starting player to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: Position::ALL.map(|position| Cell {
                position,
                occupant: Occupant::Empty,
            }),
            turn: Player::STARTING,
            history: Vec::new(),
        }
    }

    /// Clears every cell and hands the turn back to the starting player.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = Occupant::Empty;
        }
        self.turn = Player::STARTING;
        self.history.clear();
        debug!("Board reset");
    }

    /// Marks the cell at `index` for the current player.
    ///
    /// Returns the occupant written and flips the turn.
    ///
    /// # Errors
    ///
    /// - [`MarkError::InvalidIndex`] if `index` is outside 0-8.
    /// - [`MarkError::CellOccupied`] if the cell already holds a mark.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn mark(&mut self, index: isize) -> Result<Occupant, MarkError> {
        let position = Position::try_from(index)?;
        self.mark_position(position)
    }

    /// Marks `position` for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn mark_position(&mut self, position: Position) -> Result<Occupant, MarkError> {
        let cell = &mut self.cells[position.to_index()];
        if !cell.occupant.is_empty() {
            debug!(%position, "Rejected mark on occupied cell");
            return Err(MarkError::CellOccupied { position });
        }

        let occupant = Occupant::from(self.turn);
        cell.occupant = occupant;
        self.history.push(position);
        self.turn = self.turn.opponent();
        debug!(%position, ?occupant, "Cell marked");

        debug_assert!(
            BoardInvariants::check_all(self).is_ok(),
            "board invariants violated after marking {position}"
        );

        Ok(occupant)
    }

    /// Returns the mark at `position`.
    pub fn occupant_at(&self, position: Position) -> Occupant {
        self.cells[position.to_index()].occupant
    }

    /// Returns the mark at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Occupant> {
        self.cells.get(index).map(Cell::occupant)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.occupant.is_empty()).count()
    }

    /// Returns the player whose mark the next move writes.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the positions marked since the last reset.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Classifies the board as in progress, won or drawn.
    pub fn evaluate(&self) -> GameStatus {
        rules::evaluate(self)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos].occupant {
                    Occupant::Empty => (pos + 1).to_string(),
                    occupant => occupant.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Writes a mark without touching the turn or the history.
    ///
    /// Lets tests build boards that normal play cannot reach.
    #[cfg(test)]
    pub(crate) fn place_raw(&mut self, position: Position, occupant: Occupant) {
        self.cells[position.to_index()].occupant = occupant;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
