//! Perfect tic-tac-toe - game logic with an unbeatable computer opponent
//!
//! A human plays X (by default) against a computer that picks its moves
//! with full-depth minimax search, so it never loses.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, placement, win and draw detection
//! - **Search**: minimax over every continuation of a board
//! - **Engine**: the human/computer turn state machine
//! - **Invariants**: properties the engine re-checks after every transition
//! - **Audit**: exhaustive replay of every human line against the engine
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{GameEngine, MarkAssignment, Outcome, Position};
//!
//! let mut engine = GameEngine::new(MarkAssignment::default());
//! let round = engine.play_turn(Position::TopLeft)?;
//!
//! // The computer answers a corner opening in the center.
//! assert_eq!(round.computer.map(|t| t.played.position), Some(Position::Center));
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! # Ok::<(), perfect_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audit;
mod board;
mod engine;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use audit::{AuditReport, audit, audit_from};
pub use board::{Board, BoardParseError, BoardSnapshot, CellOccupied};
pub use engine::{GameEngine, Move, Phase, RoundResult, TurnResult};
pub use error::{IllegalMoveReason, MoveError, PositionError};
pub use invariants::{
    EngineInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, PhaseConsistentInvariant,
};
pub use outcome::{GameEvent, Outcome};
pub use position::Position;
pub use rules::{LineIndex, WinLine};
pub use search::{SearchOutcome, SearchStats, ScoredMove, best_move};
pub use types::{Cell, Mark, MarkAssignment, Player};
