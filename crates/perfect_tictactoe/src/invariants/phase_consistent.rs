//! Phase consistency invariant.

use super::Invariant;
use crate::engine::{GameEngine, Phase, evaluate};
use crate::outcome::Outcome;
use tracing::{instrument, warn};

/// The phase agrees with the board: terminal exactly when the board is won
/// or full, and otherwise the player due to move matches the mark counts.
pub struct PhaseConsistentInvariant;

impl Invariant<GameEngine> for PhaseConsistentInvariant {
    #[instrument(skip(engine))]
    fn holds(engine: &GameEngine) -> bool {
        let outcome = evaluate(&engine.board, engine.marks);
        let human = engine.board.count(engine.marks.human());
        let computer = engine.board.count(engine.marks.computer());

        let valid = match engine.phase {
            Phase::Terminal(recorded) => recorded == outcome && outcome.is_terminal(),
            Phase::AwaitingHumanMove => outcome == Outcome::InProgress && human == computer,
            Phase::AwaitingComputerMove => {
                outcome == Outcome::InProgress && human == computer + 1
            }
        };

        if !valid {
            warn!(phase = ?engine.phase, %outcome, human, computer, "Phase disagrees with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Phase matches the board"
    }
}
