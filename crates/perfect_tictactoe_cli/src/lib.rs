//! Perfect Tic-Tac-Toe - terminal front-end
//!
//! Wraps the [`perfect_tictactoe`] engine in a play session with a score
//! tally, a JSON leaderboard and a line-based console.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod leaderboard;
mod scoreboard;
mod session;
mod username;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, LEADERBOARD_ENV};
pub use console::{Console, ConsoleCommand, write_leaderboard};
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError};
pub use scoreboard::Scoreboard;
pub use session::{PlaySession, SessionError};
pub use username::{MAX_USERNAME_LEN, Username, UsernameError};
