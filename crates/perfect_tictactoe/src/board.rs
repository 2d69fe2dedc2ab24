//! The 3x3 board and its placement rules.

use super::position::Position;
use super::rules::{self, WinLine};
use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placement onto a cell that already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{} is already occupied", position)]
pub struct CellOccupied {
    /// The cell that was targeted.
    pub position: Position,
}

impl std::error::Error for CellOccupied {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupied`] if the cell already holds a mark; the board
    /// is left unchanged.
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), CellOccupied> {
        if !self.is_empty(pos) {
            return Err(CellOccupied { position: pos });
        }
        self.cells[pos.index()] = mark.into();
        Ok(())
    }

    /// Empties a cell. Used by search to undo a trial placement.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = Cell::Empty;
    }

    /// Returns the winning mark and line, if any line is complete.
    pub fn winner(&self) -> Option<(Mark, WinLine)> {
        rules::check_winner(self)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True if the board is won or full.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Number of non-empty cells, i.e. moves played so far.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Read-only copy for presentation.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { board: *self }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Position::ALL {
            match self.get(pos).mark() {
                Some(mark) => write!(f, "{}", mark)?,
                None => write!(f, "{}", pos.number())?,
            }
            match (pos.row(), pos.col()) {
                (2, 2) => {}
                (_, 2) => write!(f, "\n-+-+-\n")?,
                _ => write!(f, "|")?,
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of `/`-separated rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(usize),
    /// A row without exactly three cells.
    #[display("Row {} must have 3 cells, found {}", row, found)]
    RowLength {
        /// Zero-based row.
        row: usize,
        /// Cells found.
        found: usize,
    },
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

/// Parses `"XX./OO./..."`: three `/`-separated rows of `X`, `O`, or an
/// empty marker (`.`, `_`, `-`, space).
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut cells = [Cell::Empty; 9];
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != 3 {
                return Err(BoardParseError::RowLength {
                    row,
                    found: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                cells[row * 3 + col] = match ch {
                    '.' | '_' | '-' | ' ' => Cell::Empty,
                    other => Mark::from_char(other)
                        .map(Cell::from)
                        .ok_or(BoardParseError::InvalidCell(other))?,
                };
            }
        }
        Ok(Self { cells })
    }
}

/// Immutable view of a board handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    board: Board,
}

impl BoardSnapshot {
    /// Cell at `pos`.
    pub fn get(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Cells as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        self.board.rows()
    }

    /// Copy of the underlying board. Changes to the copy never reach the game.
    pub fn to_board(&self) -> Board {
        self.board
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        assert_eq!(board.get(Position::Center), Cell::X);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        let before = board;

        let err = board.place(Position::Center, Mark::O).unwrap_err();
        assert_eq!(err.position, Position::Center);
        assert_eq!(board, before);
    }

    #[test]
    fn test_counts_and_empty_positions() {
        let board: Board = "XO./.X./...".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        let empties: Vec<_> = board.empty_positions().collect();
        assert_eq!(empties.len(), 6);
        assert_eq!(empties[0], Position::TopRight);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board: Board = "X../.O./...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XX./OO.".parse::<Board>(), Err(BoardParseError::RowCount(2)));
        assert_eq!(
            "XX/OO./...".parse::<Board>(),
            Err(BoardParseError::RowLength { row: 0, found: 2 })
        );
        assert_eq!(
            "XZ./.../...".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_snapshot_is_a_detached_copy() {
        let mut board: Board = "X../.../...".parse().unwrap();
        let snapshot = board.snapshot();
        board.place(Position::Center, Mark::O).unwrap();

        assert_eq!(snapshot.get(Position::Center), Cell::Empty);
        assert_eq!(snapshot.rows()[0], [Cell::X, Cell::Empty, Cell::Empty]);
    }
}
