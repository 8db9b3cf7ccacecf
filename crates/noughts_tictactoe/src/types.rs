//! Core domain types for tic-tac-toe.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Player whose mark the next move writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes second).
    X,
    /// Player O (goes first).
    O,
}

impl Player {
    /// The player who moves first after every reset.
    pub const STARTING: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// The mark placed in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    /// Nobody has marked the cell yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Occupant {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Occupant::Empty => None,
            Occupant::X => Some(Player::X),
            Occupant::O => Some(Player::O),
        }
    }

    /// Returns true if no player has marked the cell.
    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Single character used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => ' ',
            Occupant::X => 'X',
            Occupant::O => 'O',
        }
    }
}

impl From<Player> for Occupant {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Occupant::X,
            Player::O => Occupant::O,
        }
    }
}

bitflags! {
    /// Edges of a cell that carry a grid stroke.
    ///
    /// Purely a rendering hint. Game rules never look at it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Walls: u8 {
        /// Stroke along the top edge.
        const NORTH = 1;
        /// Stroke along the bottom edge.
        const SOUTH = 1 << 1;
        /// Stroke along the right edge.
        const EAST  = 1 << 2;
        /// Stroke along the left edge.
        const WEST  = 1 << 3;
    }
}
