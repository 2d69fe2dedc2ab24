//! Game outcomes and the events emitted when a game ends.

use super::rules::WinLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still being played.
    InProgress,
    /// A player completed `WinLine`.
    Won(Player, WinLine),
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player, _) => Some(*player),
            _ => None,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player, line) => write!(f, "{} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Notification queued by the engine when a game finishes.
///
/// `HumanWon` is the signal persistence uses to record a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The human completed a line.
    HumanWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled with no line.
    Draw,
}

impl GameEvent {
    /// Event for a terminal outcome; `None` while in progress.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(Player::Human, _) => Some(GameEvent::HumanWon),
            Outcome::Won(Player::Computer, _) => Some(GameEvent::ComputerWon),
            Outcome::Draw => Some(GameEvent::Draw),
        }
    }
}
