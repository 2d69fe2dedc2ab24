//! Line-based terminal front-end.
//!
//! Works over any `BufRead`/`Write` pair so the whole loop can be driven
//! from a script in tests.

use crate::leaderboard::Leaderboard;
use crate::session::{PlaySession, SessionError};
use crate::username::Username;
use perfect_tictactoe::Position;
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play a cell.
    Play(Position),
    /// Start over.
    NewGame,
    /// Show the leaderboard.
    Leaderboard,
    /// Leave the session.
    Quit,
}

impl ConsoleCommand {
    /// Parses `n`, `l`, `q` (any case) or a cell accepted by
    /// [`Position::parse`].
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "n" => Some(Self::NewGame),
            "l" => Some(Self::Leaderboard),
            "q" => Some(Self::Quit),
            other => Position::parse(other).map(Self::Play),
        }
    }
}

/// Prompt-and-render loop over an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks until a valid name is entered. `None` on end of input.
    #[instrument(skip(self))]
    pub fn prompt_username(&mut self) -> std::io::Result<Option<Username>> {
        loop {
            write!(self.output, "Enter your name: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Username::parse(&line) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Runs games until `q` or end of input.
    #[instrument(skip(self, session), fields(username = %session.username()))]
    pub fn run(&mut self, session: &mut PlaySession) -> std::io::Result<()> {
        writeln!(
            self.output,
            "Welcome, {}! Enter a cell (1-9 or row,col), n for a new game, l for the leaderboard, q to quit.",
            session.username()
        )?;
        self.render(session)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("End of input");
                break;
            };

            if session.engine().outcome().is_terminal() {
                session.new_game();
                self.render(session)?;
                continue;
            }

            match ConsoleCommand::parse(&line) {
                None => writeln!(
                    self.output,
                    "Unrecognized input {:?}: enter 1-9, row,col, n, l or q",
                    line.trim()
                )?,
                Some(ConsoleCommand::Quit) => break,
                Some(ConsoleCommand::NewGame) => {
                    session.new_game();
                    self.render(session)?;
                }
                Some(ConsoleCommand::Leaderboard) => {
                    write_leaderboard(&mut self.output, session.leaderboard())?;
                }
                Some(ConsoleCommand::Play(pos)) => match session.play(pos) {
                    Ok(_) => self.render(session)?,
                    Err(SessionError::Move(e)) => writeln!(self.output, "{}", e)?,
                    Err(SessionError::Leaderboard(e)) => {
                        warn!(error = %e, "Leaderboard not saved");
                        writeln!(self.output, "Could not save the leaderboard: {}", e.message)?;
                        self.render(session)?;
                    }
                },
            }
        }

        writeln!(self.output, "Final score: {}", session.scoreboard())?;
        writeln!(self.output, "Thanks for playing, {}!", session.username())?;
        self.output.flush()
    }

    fn render(&mut self, session: &PlaySession) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", session.engine().board())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", session.status_line())?;
        writeln!(self.output, "{}", session.scoreboard())?;
        if session.engine().outcome().is_terminal() {
            writeln!(self.output, "Press Enter to play again.")?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Writes the ranked leaderboard.
pub fn write_leaderboard(out: &mut impl Write, leaderboard: &Leaderboard) -> std::io::Result<()> {
    writeln!(out, "Leaderboard")?;
    if leaderboard.is_empty() {
        return writeln!(out, "No wins recorded yet.");
    }
    for (rank, entry) in leaderboard.top().iter().enumerate() {
        writeln!(out, "{}. {} - {}", rank + 1, entry.username(), entry.wins())?;
    }
    Ok(())
}
