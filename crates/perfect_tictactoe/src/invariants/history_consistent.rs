//! History consistency invariant.

use super::Invariant;
use crate::engine::GameEngine;
use tracing::{instrument, warn};

/// Every move in the history is on the board with its player's mark, and
/// the board holds nothing else beyond the starting position.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    #[instrument(skip(engine))]
    fn holds(engine: &GameEngine) -> bool {
        let expected = engine.start.occupied_count() + engine.history.len();
        let filled = engine.board.occupied_count();
        if filled != expected {
            warn!(filled, expected, "History length does not match the board");
            return false;
        }

        for mv in &engine.history {
            let mark = engine.marks.mark_of(mv.player);
            if engine.board.get(mv.position).mark() != Some(mark) {
                warn!(%mv, "History move missing from the board");
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "History matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, MarkAssignment, Position};

    #[test]
    fn test_holds_for_resumed_position() {
        let board: Board = "X../.O./...".parse().unwrap();
        let mut engine = GameEngine::from_position(board, MarkAssignment::default()).unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));

        engine.play_turn(Position::BottomRight).unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_untracked_mark() {
        let mut engine = GameEngine::new(MarkAssignment::default());
        engine.play_human_move(Position::Center).unwrap();
        engine.board.place(Position::TopLeft, Mark::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_overwritten_move() {
        let mut engine = GameEngine::new(MarkAssignment::default());
        engine.play_human_move(Position::Center).unwrap();
        engine.board.clear(Position::Center);
        engine.board.place(Position::Center, Mark::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
