//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};

/// Which of the three rows or columns a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineIndex {
    /// Top row or left column.
    First,
    /// Middle row or center column.
    Second,
    /// Bottom row or right column.
    Third,
}

impl LineIndex {
    /// The three indices in order.
    pub const ALL: [LineIndex; 3] = [LineIndex::First, LineIndex::Second, LineIndex::Third];

    /// Zero-based row or column number.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LineIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// One of the eight triples that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    /// A row, top to bottom.
    Row(LineIndex),
    /// A column, left to right.
    Column(LineIndex),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinLine {
    /// All lines in scan order: rows, then columns, then both diagonals.
    pub const ALL: [WinLine; 8] = [
        WinLine::Row(LineIndex::First),
        WinLine::Row(LineIndex::Second),
        WinLine::Row(LineIndex::Third),
        WinLine::Column(LineIndex::First),
        WinLine::Column(LineIndex::Second),
        WinLine::Column(LineIndex::Third),
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        let at = |row: usize, col: usize| Position::ALL[row * 3 + col];
        match self {
            WinLine::Row(r) => [at(r.index(), 0), at(r.index(), 1), at(r.index(), 2)],
            WinLine::Column(c) => [at(0, c.index()), at(1, c.index()), at(2, c.index())],
            WinLine::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            WinLine::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinLine::Row(r) => write!(f, "row {}", r),
            WinLine::Column(c) => write!(f, "column {}", c),
            WinLine::MainDiagonal => write!(f, "main diagonal"),
            WinLine::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark holding the first uniform line in [`WinLine::ALL`]
/// order together with that line, or `None` if no line is complete.
pub fn check_winner(board: &Board) -> Option<(Mark, WinLine)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = board.get(a).mark()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((mark, line))
    })
}
