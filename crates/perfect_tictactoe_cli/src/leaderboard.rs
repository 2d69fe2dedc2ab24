//! Persistent leaderboard of human wins.
//!
//! Stored as a JSON object mapping each username to its best session win
//! count. Only the top entries are written back.

use crate::username::Username;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct LeaderboardEntry {
    /// Player name.
    username: Username,
    /// Best session win count.
    wins: u32,
}

/// Win counts keyed by username, bound to a file.
#[derive(Debug, Clone, Getters)]
pub struct Leaderboard {
    /// Backing JSON file.
    path: PathBuf,
    /// Entries kept by [`Leaderboard::top`] and [`Leaderboard::save`].
    max_entries: usize,
    #[getter(skip)]
    scores: BTreeMap<Username, u32>,
}

impl Leaderboard {
    /// Creates an empty leaderboard that saves to `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn empty(path: impl AsRef<Path>, max_entries: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_entries,
            scores: BTreeMap::new(),
        }
    }

    /// Reads the leaderboard at `path`. A missing file is an empty board.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, max_entries: usize) -> Result<Self, LeaderboardError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard file yet");
                return Ok(Self::empty(path, max_entries));
            }
            Err(e) => {
                return Err(LeaderboardError::new(format!(
                    "Failed to read leaderboard: {}",
                    e
                )));
            }
        };

        let scores: BTreeMap<Username, u32> = serde_json::from_str(&content)?;
        info!(entries = scores.len(), "Leaderboard loaded");
        Ok(Self {
            path: path.to_path_buf(),
            max_entries,
            scores,
        })
    }

    /// Records `wins` for `username`, keeping the higher of the stored and
    /// new counts. Returns the stored count.
    #[instrument(skip(self, username), fields(username = %username))]
    pub fn record(&mut self, username: &Username, wins: u32) -> u32 {
        let stored = self.scores.entry(username.clone()).or_insert(0);
        if wins > *stored {
            *stored = wins;
        }
        debug!(stored = *stored, "Win count recorded");
        *stored
    }

    /// Stored count for `username`.
    pub fn wins_for(&self, username: &str) -> Option<u32> {
        self.scores.get(username).copied()
    }

    /// Entries by wins descending, then name ascending, at most
    /// `max_entries` long.
    pub fn top(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .scores
            .iter()
            .map(|(name, wins)| LeaderboardEntry::new(name.clone(), *wins))
            .collect();
        entries.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.username.cmp(&b.username)));
        entries.truncate(self.max_entries);
        entries
    }

    /// True if no wins have been recorded.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Writes the top entries to the backing file.
    ///
    /// The JSON goes to a temporary file in the same directory, which is
    /// then renamed over the old one, so readers never see a partial write.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), LeaderboardError> {
        let kept: BTreeMap<Username, u32> = self
            .top()
            .into_iter()
            .map(|entry| (entry.username, entry.wins))
            .collect();
        let json = serde_json::to_string_pretty(&kept)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| {
            LeaderboardError::new(format!("Failed to create temporary file: {}", e))
        })?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| LeaderboardError::new(format!("Failed to write leaderboard: {}", e)))?;
        tmp.persist(&self.path)
            .map_err(|e| LeaderboardError::new(format!("Failed to replace leaderboard: {}", e)))?;

        info!(entries = kept.len(), "Leaderboard saved");
        Ok(())
    }
}

/// Leaderboard error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Leaderboard error: {} at {}:{}", message, file, line)]
pub struct LeaderboardError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LeaderboardError {
    /// Creates a new leaderboard error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<serde_json::Error> for LeaderboardError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid leaderboard JSON: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Username {
        Username::parse(s).unwrap()
    }

    #[test]
    fn test_record_keeps_best_count() {
        let mut board = Leaderboard::empty("unused.json", 5);
        assert_eq!(board.record(&name("alice"), 2), 2);
        assert_eq!(board.record(&name("alice"), 1), 2);
        assert_eq!(board.record(&name("alice"), 4), 4);
        assert_eq!(board.wins_for("alice"), Some(4));
        assert_eq!(board.wins_for("bob"), None);
    }

    #[test]
    fn test_top_orders_by_wins_then_name() {
        let mut board = Leaderboard::empty("unused.json", 3);
        board.record(&name("carol"), 2);
        board.record(&name("alice"), 2);
        board.record(&name("dave"), 5);
        board.record(&name("bob"), 1);

        let top: Vec<(String, u32)> = board
            .top()
            .into_iter()
            .map(|e| (e.username().to_string(), *e.wins()))
            .collect();
        assert_eq!(
            top,
            vec![
                ("dave".to_string(), 5),
                ("alice".to_string(), 2),
                ("carol".to_string(), 2),
            ]
        );
    }
}
