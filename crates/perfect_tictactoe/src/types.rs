//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The X mark.
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a mark from a single letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Holds an X.
    X,
    /// Holds an O.
    O,
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person at the keyboard. Always moves first.
    Human,
    /// The minimax opponent.
    Computer,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// Binding of players to marks, fixed for a whole session.
///
/// The computer always takes the mark the human does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkAssignment {
    human: Mark,
}

impl MarkAssignment {
    /// Creates an assignment giving `human` to the human player.
    pub fn new(human: Mark) -> Self {
        Self { human }
    }

    /// Mark used by the human.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// Mark used by the computer.
    pub fn computer(&self) -> Mark {
        self.human.opponent()
    }

    /// Returns the mark bound to `player`.
    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Human => self.human(),
            Player::Computer => self.computer(),
        }
    }

    /// Returns the player bound to `mark`.
    pub fn player_of(&self, mark: Mark) -> Player {
        if mark == self.human {
            Player::Human
        } else {
            Player::Computer
        }
    }
}

impl Default for MarkAssignment {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}
