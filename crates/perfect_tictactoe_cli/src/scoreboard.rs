//! Per-session score tally.

use derive_getters::Getters;
use perfect_tictactoe::GameEvent;

/// Games won, lost and drawn since the session started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Games the human won.
    human_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Counts one finished game.
    pub fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::HumanWon => self.human_wins += 1,
            GameEvent::ComputerWon => self.computer_wins += 1,
            GameEvent::Draw => self.draws += 1,
        }
    }

    /// Finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Human: {} | AI: {} | Draws: {}",
            self.human_wins, self.computer_wins, self.draws
        )
    }
}
