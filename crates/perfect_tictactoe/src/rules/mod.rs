//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules.
//! Rules are kept apart from board storage so the search and the engine
//! share one definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineIndex, WinLine, check_winner};
