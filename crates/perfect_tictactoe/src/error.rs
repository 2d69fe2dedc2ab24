//! Errors reported by the game engine.

use super::board::CellOccupied;
use super::types::{Mark, Player};

/// Why a command was rejected in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveReason {
    /// The target cell already holds a mark.
    #[display("{}", _0)]
    CellOccupied(CellOccupied),
    /// The command belongs to the other player's turn.
    #[display("it is the {}'s turn", _0)]
    OutOfTurn(Player),
}

/// Error returned by a rejected engine command.
///
/// Every variant leaves the board and the engine state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The command is not legal in the current state.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMoveReason),

    /// The game has finished; call `reset` first.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

impl From<CellOccupied> for MoveError {
    fn from(err: CellOccupied) -> Self {
        MoveError::IllegalMove(IllegalMoveReason::CellOccupied(err))
    }
}

/// A board that cannot arise from alternating play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PositionError {
    /// The human moves first, so the human has as many marks as the
    /// computer or exactly one more.
    #[display("Unreachable mark balance: {} has {}, {} has {}", human, human_count, computer, computer_count)]
    MarkBalance {
        /// Human's mark.
        human: Mark,
        /// Cells holding the human's mark.
        human_count: usize,
        /// Computer's mark.
        computer: Mark,
        /// Cells holding the computer's mark.
        computer_count: usize,
    },

    /// Both marks hold a complete line.
    #[display("Both players have a completed line")]
    TwoWinners,

    /// The winner's opponent moved after the game was over.
    #[display("Moves were played after {} completed a line", _0)]
    PlayAfterWin(Player),
}

impl std::error::Error for PositionError {}
