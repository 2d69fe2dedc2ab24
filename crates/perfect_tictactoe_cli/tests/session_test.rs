//! Tests for play sessions and the scripted console.

use perfect_tictactoe::{Board, GameEngine, MarkAssignment, Position};
use perfect_tictactoe_cli::{Console, Leaderboard, PlaySession, SessionError, Username};
use std::path::Path;

/// Human (X) to move with a win on the anti-diagonal at cell 7.
const HUMAN_WINS_NEXT: &str = "O.X/OX./...";

fn winnable_session(leaderboard_path: &Path) -> PlaySession {
    let board: Board = HUMAN_WINS_NEXT.parse().expect("Valid fixture");
    let engine =
        GameEngine::from_position(board, MarkAssignment::default()).expect("Reachable fixture");
    PlaySession::with_engine(
        Username::parse("alice").expect("Valid username"),
        engine,
        Leaderboard::load(leaderboard_path, 5).expect("Readable leaderboard"),
    )
}

fn run_script(session: &mut PlaySession, script: &str) -> String {
    let mut console = Console::new(script.as_bytes(), Vec::new());
    console.run(session).expect("In-memory streams cannot fail");
    String::from_utf8(console.into_output()).expect("Console writes UTF-8")
}

#[test]
fn test_human_win_is_scored_and_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.json");
    let mut session = winnable_session(&path);

    let round = session.play(Position::BottomLeft).unwrap();
    assert!(round.computer.is_none());
    assert_eq!(session.status_line(), "X won!");
    assert_eq!(*session.scoreboard().human_wins(), 1);

    let saved = Leaderboard::load(&path, 5).unwrap();
    assert_eq!(saved.wins_for("alice"), Some(1));
}

#[test]
fn test_computer_win_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.json");
    let board: Board = "XX./OO./...".parse().unwrap();
    let engine = GameEngine::from_position(board, MarkAssignment::default()).unwrap();
    let mut session = PlaySession::with_engine(
        Username::parse("bob").unwrap(),
        engine,
        Leaderboard::load(&path, 5).unwrap(),
    );

    // Human ignores the threat; the computer completes a line.
    session.play(Position::BottomLeft).unwrap();
    assert_eq!(session.status_line(), "O won!");
    assert_eq!(*session.scoreboard().computer_wins(), 1);
    assert!(!path.exists());
}

#[test]
fn test_failed_save_keeps_the_move() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("leaderboard.json");
    let mut session = winnable_session(&path);

    let err = session.play(Position::BottomLeft).unwrap_err();
    assert!(matches!(err, SessionError::Leaderboard(_)));
    assert!(session.engine().outcome().is_terminal());
    assert_eq!(*session.scoreboard().human_wins(), 1);
}

#[test]
fn test_console_plays_a_winning_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.json");
    let mut session = winnable_session(&path);

    let output = run_script(&mut session, "7\n\nl\nq\n");

    assert!(output.contains("Welcome, alice!"));
    assert!(output.contains("X won!"));
    assert!(output.contains("Human: 1 | AI: 0 | Draws: 0"));
    assert!(output.contains("Press Enter to play again."));
    // The empty line started a fresh game.
    assert!(output.contains("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
    assert!(output.contains("1. alice - 1"));
    assert!(output.ends_with("Thanks for playing, alice!\n"));
    assert!(session.engine().history().is_empty());
}

#[test]
fn test_console_reports_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = PlaySession::new(
        Username::parse("carol").unwrap(),
        MarkAssignment::default(),
        Leaderboard::load(dir.path().join("leaderboard.json"), 5).unwrap(),
    );

    let output = run_script(&mut session, "1\n1\nfoo\n0,0\nl\nq\n");

    assert!(output.contains("X's Turn"));
    assert!(output.contains("Illegal move: Top-left is already occupied"));
    assert!(output.contains("Unrecognized input \"foo\""));
    assert!(output.contains("No wins recorded yet."));
    assert!(output.contains("Final score: Human: 0 | AI: 0 | Draws: 0"));
    // Only the first move and the computer's reply were played.
    assert_eq!(session.engine().history().len(), 2);
}

#[test]
fn test_console_new_game_and_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = PlaySession::new(
        Username::parse("dave").unwrap(),
        MarkAssignment::default(),
        Leaderboard::load(dir.path().join("leaderboard.json"), 5).unwrap(),
    );

    // No trailing `q`: end of input ends the session.
    let output = run_script(&mut session, "5\nn\n");

    assert!(session.engine().history().is_empty());
    assert!(output.contains("Final score"));
}
