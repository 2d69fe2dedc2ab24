//! Exhaustive audit of the computer opponent.
//!
//! Plays every legal human move sequence against the engine and tallies how
//! each game ends. The computer is unbeatable iff `human_wins` is zero.

use super::engine::{GameEngine, Phase};
use super::outcome::Outcome;
use super::position::Position;
use super::types::{MarkAssignment, Player};
use tracing::{info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuditReport {
    /// Distinct games played to the end.
    pub games: u64,
    /// Games the human won.
    pub human_wins: u64,
    /// Games the computer won.
    pub computer_wins: u64,
    /// Drawn games.
    pub draws: u64,
}

impl AuditReport {
    /// True if no line of play lets the human win.
    pub fn is_unbeatable(&self) -> bool {
        self.human_wins == 0
    }

    fn tally(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Player::Human, _) => self.human_wins += 1,
            Outcome::Won(Player::Computer, _) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

/// Audits a fresh game under `marks`.
#[instrument]
pub fn audit(marks: MarkAssignment) -> AuditReport {
    audit_from(&GameEngine::new(marks))
}

/// Audits every continuation of `engine`'s current game.
#[instrument(skip(engine), fields(phase = ?engine.phase()))]
pub fn audit_from(engine: &GameEngine) -> AuditReport {
    let mut report = AuditReport::default();
    explore(engine, &mut report);
    info!(
        games = report.games,
        human_wins = report.human_wins,
        computer_wins = report.computer_wins,
        draws = report.draws,
        "Audit complete"
    );
    report
}

fn explore(engine: &GameEngine, report: &mut AuditReport) {
    match engine.phase() {
        Phase::Terminal(outcome) => report.tally(outcome),
        Phase::AwaitingHumanMove => {
            let board = engine.board();
            for pos in Position::ALL {
                if !board.get(pos).is_empty() {
                    continue;
                }
                let mut next = engine.clone();
                if next.play_human_move(pos).is_ok() {
                    explore(&next, report);
                }
            }
        }
        Phase::AwaitingComputerMove => {
            let mut next = engine.clone();
            if next.request_computer_move().is_ok() {
                explore(&next, report);
            }
        }
    }
}
