//! Command-line interface for the tic-tac-toe binary.

use crate::username::Username;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Perfect Tic-Tac-Toe - play against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games in the terminal
    Play {
        /// Path to a TOML config file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player name; prompted for if not given
        #[arg(short, long)]
        username: Option<Username>,
    },

    /// Show the leaderboard
    Leaders {
        /// Path to a TOML config file (defaults to tictactoe.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Play every possible human line against the computer and report the results
    Audit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_play_flags() {
        let cli = Cli::parse_from(["tictactoe", "play", "--username", "alice", "-c", "my.toml"]);
        match cli.command {
            Command::Play { config, username } => {
                assert_eq!(config, Some(PathBuf::from("my.toml")));
                assert_eq!(username.map(|u| u.to_string()), Some("alice".to_string()));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_username() {
        let err = Cli::try_parse_from(["tictactoe", "play", "--username", "   "]).unwrap_err();
        assert!(err.to_string().contains("Username cannot be empty"));
    }

    #[test]
    fn test_parses_bare_commands() {
        assert!(matches!(
            Cli::parse_from(["tictactoe", "audit"]).command,
            Command::Audit
        ));
        assert!(matches!(
            Cli::parse_from(["tictactoe", "leaders"]).command,
            Command::Leaders { config: None }
        ));
    }
}
