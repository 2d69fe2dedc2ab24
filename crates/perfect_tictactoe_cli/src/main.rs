//! Perfect Tic-Tac-Toe - terminal binary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use perfect_tictactoe::{Mark, MarkAssignment, audit};
use perfect_tictactoe_cli::{
    AppConfig, Cli, Command, Console, Leaderboard, PlaySession, Username, write_leaderboard,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, username } => run_play(config, username),
        Command::Leaders { config } => run_leaders(config),
        Command::Audit => run_audit(),
    }
}

/// Load the config and the leaderboard it points at
fn load(config: Option<PathBuf>) -> Result<(AppConfig, Leaderboard)> {
    let config = AppConfig::load(config.as_deref()).context("Failed to load configuration")?;
    let leaderboard = Leaderboard::load(config.leaderboard_path(), *config.max_leaderboard_entries())
        .with_context(|| {
            format!(
                "Failed to load leaderboard from {}",
                config.leaderboard_path().display()
            )
        })?;
    Ok((config, leaderboard))
}

/// Play games on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: Option<PathBuf>, username: Option<Username>) -> Result<()> {
    let (config, leaderboard) = load(config)?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    let username = match username {
        Some(name) => name,
        None => match console.prompt_username()? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    info!(username = %username, human_mark = %config.human_mark(), "Starting play session");
    let mut session = PlaySession::new(username, config.marks(), leaderboard);
    console.run(&mut session)?;
    Ok(())
}

/// Print the leaderboard
#[instrument(skip_all)]
fn run_leaders(config: Option<PathBuf>) -> Result<()> {
    let (_, leaderboard) = load(config)?;
    let mut stdout = std::io::stdout();
    write_leaderboard(&mut stdout, &leaderboard)?;
    stdout.flush()?;
    Ok(())
}

/// Replay every human line for both mark assignments
#[instrument]
fn run_audit() -> Result<()> {
    let mut stdout = std::io::stdout();
    let mut beaten = false;

    for human in [Mark::X, Mark::O] {
        let report = audit(MarkAssignment::new(human));
        writeln!(
            stdout,
            "Human as {}: {} games, {} human wins, {} computer wins, {} draws",
            human, report.games, report.human_wins, report.computer_wins, report.draws
        )?;
        beaten |= !report.is_unbeatable();
    }

    if beaten {
        bail!("The computer lost at least one game");
    }
    writeln!(stdout, "The computer never loses.")?;
    Ok(())
}
