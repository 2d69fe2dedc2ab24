//! Mark balance invariant.

use super::Invariant;
use crate::engine::GameEngine;
use tracing::{instrument, warn};

/// The human moves first, so the human holds as many marks as the computer
/// or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    #[instrument(skip(engine))]
    fn holds(engine: &GameEngine) -> bool {
        let human = engine.board.count(engine.marks.human());
        let computer = engine.board.count(engine.marks.computer());

        let valid = human == computer || human == computer + 1;
        if !valid {
            warn!(human, computer, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Human marks equal computer marks or exceed them by one"
    }
}
