//! Human-vs-computer game engine.
//!
//! The engine owns the board and moves through three phases:
//!
//! ```text
//! AwaitingHumanMove --play_human_move--> AwaitingComputerMove
//!        ^                                      |
//!        +-------request_computer_move----------+
//!
//! any non-terminal phase --(line or full board)--> Terminal(outcome)
//! any phase --reset--> AwaitingHumanMove
//! ```
//!
//! Rejected commands never touch the board.

use super::board::{Board, BoardSnapshot};
use super::error::{IllegalMoveReason, MoveError, PositionError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::outcome::{GameEvent, Outcome};
use super::position::Position;
use super::rules::WinLine;
use super::search;
use super::types::{Mark, MarkAssignment, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for `play_human_move`.
    AwaitingHumanMove,
    /// Waiting for `request_computer_move`.
    AwaitingComputerMove,
    /// Won or drawn; only `reset` is accepted.
    Terminal(Outcome),
}

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What one accepted command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The placement made.
    pub played: Move,
    /// Outcome right after the placement.
    pub outcome: Outcome,
}

/// A human move and the computer's reply, if the game was still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The human's placement.
    pub human: TurnResult,
    /// The computer's placement, absent when the human ended the game.
    pub computer: Option<TurnResult>,
}

impl RoundResult {
    /// Outcome after the whole round.
    pub fn outcome(&self) -> Outcome {
        self.computer.unwrap_or(self.human).outcome
    }
}

/// Game engine for one human-vs-computer session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) start: Board,
    pub(crate) marks: MarkAssignment,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    pub(crate) events: Vec<GameEvent>,
}

impl GameEngine {
    /// Creates an engine with an empty board and the human to move.
    #[instrument]
    pub fn new(marks: MarkAssignment) -> Self {
        info!(human = %marks.human(), computer = %marks.computer(), "Creating game engine");
        Self {
            board: Board::new(),
            start: Board::new(),
            marks,
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Resumes play from an arbitrary position.
    ///
    /// The human always moves first, so a reachable board has as many
    /// human marks as computer marks (human to move) or one more (computer
    /// to move). Terminal boards resume in `Terminal`.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] if the board cannot arise from alternating
    /// play.
    #[instrument(skip(board), fields(board = ?board.cells()))]
    pub fn from_position(board: Board, marks: MarkAssignment) -> Result<Self, PositionError> {
        let human_count = board.count(marks.human());
        let computer_count = board.count(marks.computer());

        if human_count != computer_count && human_count != computer_count + 1 {
            warn!(human_count, computer_count, "Rejecting position with bad mark balance");
            return Err(PositionError::MarkBalance {
                human: marks.human(),
                human_count,
                computer: marks.computer(),
                computer_count,
            });
        }

        let lines_of = |mark: Mark| {
            WinLine::ALL
                .iter()
                .filter(|line| line.positions().iter().all(|&p| board.get(p).mark() == Some(mark)))
                .count()
        };
        let human_lines = lines_of(marks.human());
        let computer_lines = lines_of(marks.computer());

        if human_lines > 0 && computer_lines > 0 {
            return Err(PositionError::TwoWinners);
        }
        // The winner must have made the last placement.
        if human_lines > 0 && human_count == computer_count {
            return Err(PositionError::PlayAfterWin(Player::Human));
        }
        if computer_lines > 0 && human_count != computer_count {
            return Err(PositionError::PlayAfterWin(Player::Computer));
        }

        let outcome = evaluate(&board, marks);
        let phase = if outcome.is_terminal() {
            Phase::Terminal(outcome)
        } else if human_count == computer_count {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingComputerMove
        };

        debug!(?phase, "Position accepted");
        Ok(Self {
            board,
            start: board,
            marks,
            phase,
            history: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Plays the human's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the game has finished.
    /// - [`MoveError::IllegalMove`] if the cell is occupied or the computer
    ///   is due to move.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_human_move(&mut self, pos: Position) -> Result<TurnResult, MoveError> {
        match self.phase {
            Phase::Terminal(_) => return Err(MoveError::GameAlreadyOver),
            Phase::AwaitingComputerMove => {
                return Err(MoveError::IllegalMove(IllegalMoveReason::OutOfTurn(
                    Player::Computer,
                )));
            }
            Phase::AwaitingHumanMove => {}
        }

        self.apply(Move::new(Player::Human, pos))
    }

    /// Lets the computer play its optimal move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the game has finished.
    /// - [`MoveError::IllegalMove`] if the human is due to move.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_computer_move(&mut self) -> Result<TurnResult, MoveError> {
        match self.phase {
            Phase::Terminal(_) => return Err(MoveError::GameAlreadyOver),
            Phase::AwaitingHumanMove => {
                return Err(MoveError::IllegalMove(IllegalMoveReason::OutOfTurn(
                    Player::Human,
                )));
            }
            Phase::AwaitingComputerMove => {}
        }

        let Some(pos) = search::best_move(&self.board, self.marks.computer(), self.marks.human())
        else {
            // Unreachable while the phase agrees with the board.
            let outcome = evaluate(&self.board, self.marks);
            warn!(%outcome, "No move available for the computer");
            self.phase = Phase::Terminal(outcome);
            return Err(MoveError::GameAlreadyOver);
        };

        self.apply(Move::new(Player::Computer, pos))
    }

    /// Plays the human's move, then the computer's reply if the game is
    /// still open.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::play_human_move`]; nothing is played on error.
    #[instrument(skip(self))]
    pub fn play_turn(&mut self, pos: Position) -> Result<RoundResult, MoveError> {
        let human = self.play_human_move(pos)?;
        let computer = match self.phase {
            Phase::AwaitingComputerMove => Some(self.request_computer_move()?),
            _ => None,
        };
        Ok(RoundResult { human, computer })
    }

    /// Clears the board and hands the first move to the human.
    ///
    /// Accepted in every phase. Queued events are kept so a caller that
    /// resets right after a finished game still sees its result.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.start = Board::new();
        self.phase = Phase::AwaitingHumanMove;
        self.history.clear();
        self.check_invariants();
    }

    /// Read-only copy of the board.
    pub fn board(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Terminal(outcome) => outcome,
            _ => Outcome::InProgress,
        }
    }

    /// Player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingHumanMove => Some(Player::Human),
            Phase::AwaitingComputerMove => Some(Player::Computer),
            Phase::Terminal(_) => None,
        }
    }

    /// Mark binding for this session.
    pub fn marks(&self) -> MarkAssignment {
        self.marks
    }

    /// Moves played since the last reset, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply(&mut self, mv: Move) -> Result<TurnResult, MoveError> {
        self.board.place(mv.position, self.marks.mark_of(mv.player))?;
        self.history.push(mv);

        let outcome = evaluate(&self.board, self.marks);
        self.phase = match outcome {
            Outcome::InProgress => match mv.player {
                Player::Human => Phase::AwaitingComputerMove,
                Player::Computer => Phase::AwaitingHumanMove,
            },
            terminal => Phase::Terminal(terminal),
        };

        if let Some(event) = GameEvent::from_outcome(outcome) {
            info!(%outcome, moves = self.history.len(), "Game finished");
            self.events.push(event);
        } else {
            debug!(played = %mv, "Move applied");
        }

        self.check_invariants();
        Ok(TurnResult {
            played: mv,
            outcome,
        })
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let checked = EngineInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Engine invariants violated: {:?}", checked);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(MarkAssignment::default())
    }
}

/// Outcome of `board` with players bound by `marks`.
pub(crate) fn evaluate(board: &Board, marks: MarkAssignment) -> Outcome {
    if let Some((mark, line)) = board.winner() {
        Outcome::Won(marks.player_of(mark), line)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
