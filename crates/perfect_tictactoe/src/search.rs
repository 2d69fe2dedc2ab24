//! Full-depth minimax search for the computer's move.
//!
//! The tree is at most nine plies deep, so every line is played out to a
//! won or full board and no evaluation heuristic is needed. Scores do not
//! depend on depth: all wins are worth the same, and among equally scored
//! moves the first one in row-major order is kept.

use super::board::Board;
use super::position::Position;
use super::types::Mark;
use tracing::{debug, instrument};

/// Score of a position won by the maximizing mark.
pub const WIN_SCORE: i32 = 10;

/// Score of a position won by the minimizing mark.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a full board without a line.
pub const DRAW_SCORE: i32 = 0;

/// A root move and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// Cell to play.
    pub position: Position,
    /// Value from the maximizing mark's point of view.
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Placements tried, root moves included.
    pub nodes: u64,
}

/// Result of [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move; `None` when the board was already won or full.
    pub best: Option<ScoredMove>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Returns the optimal cell for `maximizing` to play, or `None` if the
/// board is already terminal.
pub fn best_move(board: &Board, maximizing: Mark, minimizing: Mark) -> Option<Position> {
    search(board, maximizing, minimizing)
        .best
        .map(|scored| scored.position)
}

/// Searches every continuation of `board` with `maximizing` to move.
///
/// The caller's board is never modified; trial placements are made and
/// undone on a private copy.
#[instrument(skip(board), fields(empty = board.empty_positions().count()))]
pub fn search(board: &Board, maximizing: Mark, minimizing: Mark) -> SearchOutcome {
    debug_assert_ne!(maximizing, minimizing, "search needs two distinct marks");

    let mut stats = SearchStats::default();
    if board.is_terminal() {
        debug!("Board already terminal, nothing to search");
        return SearchOutcome { best: None, stats };
    }

    let mut scratch = *board;
    let mut best: Option<ScoredMove> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }

        // Empty was just checked, so the placement cannot fail.
        if scratch.place(pos, maximizing).is_err() {
            continue;
        }
        stats.nodes += 1;
        let score = minimax(&mut scratch, maximizing, minimizing, false, &mut stats);
        scratch.clear(pos);

        if best.is_none_or(|b| score > b.score) {
            best = Some(ScoredMove { position: pos, score });
        }
    }

    debug!(
        best = ?best.map(|b| b.position),
        score = ?best.map(|b| b.score),
        nodes = stats.nodes,
        "Search complete"
    );

    SearchOutcome { best, stats }
}

/// Minimax value of `board` from `maximizing`'s point of view.
///
/// `maximizing_turn` says whose mark is placed next. The board is restored
/// before returning.
fn minimax(
    board: &mut Board,
    maximizing: Mark,
    minimizing: Mark,
    maximizing_turn: bool,
    stats: &mut SearchStats,
) -> i32 {
    if let Some((mark, _)) = board.winner() {
        return if mark == maximizing { WIN_SCORE } else { LOSS_SCORE };
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mark = if maximizing_turn { maximizing } else { minimizing };
    let mut best = if maximizing_turn { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        if board.place(pos, mark).is_err() {
            continue;
        }
        stats.nodes += 1;
        let score = minimax(board, maximizing, minimizing, !maximizing_turn, stats);
        board.clear(pos);

        if maximizing_turn {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}
