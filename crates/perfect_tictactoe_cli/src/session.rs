//! A run of games between one named human and the computer.

use crate::leaderboard::{Leaderboard, LeaderboardError};
use crate::scoreboard::Scoreboard;
use crate::username::Username;
use perfect_tictactoe::{
    GameEngine, GameEvent, MarkAssignment, MoveError, Outcome, Phase, Player, Position,
    RoundResult,
};
use tracing::{debug, info, instrument, warn};

/// Error from a session command.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The engine rejected the move; nothing changed.
    #[display("{}", _0)]
    Move(MoveError),

    /// The move was played but the leaderboard could not be saved.
    #[display("{}", _0)]
    Leaderboard(LeaderboardError),
}

impl std::error::Error for SessionError {}

/// Engine, score and leaderboard for one player's sitting.
#[derive(Debug, Clone)]
pub struct PlaySession {
    username: Username,
    engine: GameEngine,
    scoreboard: Scoreboard,
    leaderboard: Leaderboard,
}

impl PlaySession {
    /// Starts a session with a fresh game.
    #[instrument(skip(username, leaderboard), fields(username = %username))]
    pub fn new(username: Username, marks: MarkAssignment, leaderboard: Leaderboard) -> Self {
        Self::with_engine(username, GameEngine::new(marks), leaderboard)
    }

    /// Starts a session from an existing game.
    pub fn with_engine(username: Username, engine: GameEngine, leaderboard: Leaderboard) -> Self {
        info!(username = %username, "Session started");
        Self {
            username,
            engine,
            scoreboard: Scoreboard::default(),
            leaderboard,
        }
    }

    /// Plays the human's move and, if the game goes on, the computer's reply.
    ///
    /// Finished games are scored before returning. A human win is written
    /// to the leaderboard; if that write fails the move still stands and
    /// [`SessionError::Leaderboard`] is returned.
    #[instrument(skip(self), fields(username = %self.username))]
    pub fn play(&mut self, pos: Position) -> Result<RoundResult, SessionError> {
        let round = self.engine.play_turn(pos)?;
        self.settle()?;
        Ok(round)
    }

    /// Abandons the current game and starts a new one.
    #[instrument(skip(self), fields(username = %self.username))]
    pub fn new_game(&mut self) {
        if !self.engine.outcome().is_terminal() && !self.engine.history().is_empty() {
            debug!("Abandoning unfinished game");
        }
        self.engine.reset();
    }

    /// Player name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Session tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Leaderboard this session writes to.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Status line for the current game: `X's Turn`, `O won!` or
    /// `Game Draw!`.
    pub fn status_line(&self) -> String {
        let marks = self.engine.marks();
        match self.engine.phase() {
            Phase::AwaitingHumanMove => format!("{}'s Turn", marks.mark_of(Player::Human)),
            Phase::AwaitingComputerMove => format!("{}'s Turn", marks.mark_of(Player::Computer)),
            Phase::Terminal(Outcome::Won(player, _)) => format!("{} won!", marks.mark_of(player)),
            Phase::Terminal(_) => "Game Draw!".to_string(),
        }
    }

    fn settle(&mut self) -> Result<(), LeaderboardError> {
        for event in self.engine.drain_events() {
            self.scoreboard.record(event);
            info!(?event, score = %self.scoreboard, "Game finished");

            if event == GameEvent::HumanWon {
                let wins = *self.scoreboard.human_wins();
                self.leaderboard.record(&self.username, wins);
                if let Err(e) = self.leaderboard.save() {
                    warn!(error = %e, "Failed to save leaderboard");
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfect_tictactoe::Mark;

    fn session(marks: MarkAssignment) -> PlaySession {
        PlaySession::new(
            Username::parse("tester").unwrap(),
            marks,
            Leaderboard::empty("unused.json", 5),
        )
    }

    #[test]
    fn test_status_follows_human_mark() {
        let mut as_x = session(MarkAssignment::default());
        assert_eq!(as_x.status_line(), "X's Turn");
        as_x.play(Position::TopLeft).unwrap();
        assert_eq!(as_x.status_line(), "X's Turn");

        let as_o = session(MarkAssignment::new(Mark::O));
        assert_eq!(as_o.status_line(), "O's Turn");
    }

    #[test]
    fn test_illegal_move_is_move_error() {
        let mut s = session(MarkAssignment::default());
        s.play(Position::Center).unwrap();
        let err = s.play(Position::Center).unwrap_err();
        assert!(matches!(err, SessionError::Move(MoveError::IllegalMove(_))));
        assert_eq!(s.engine().history().len(), 2);
    }

    #[test]
    fn test_new_game_clears_board_keeps_score() {
        let mut s = session(MarkAssignment::default());
        s.play(Position::TopLeft).unwrap();
        s.new_game();
        assert!(s.engine().history().is_empty());
        assert_eq!(s.status_line(), "X's Turn");
        assert_eq!(s.scoreboard().games(), 0);
    }
}
