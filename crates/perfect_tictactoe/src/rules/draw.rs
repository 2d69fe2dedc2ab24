//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Position};

/// Checks if the board is full (no empty cell remains).
pub fn is_full(board: &Board) -> bool {
    Position::ALL.iter().all(|&pos| !board.is_empty(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(board.winner().is_none());
    }

    #[test]
    fn test_full_board_with_winner() {
        // Full board where X completes the top row.
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(board.winner().is_some());
    }
}
