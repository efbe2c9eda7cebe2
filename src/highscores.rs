//! High score leaderboard system
//!
//! Persisted to a JSON file, tracks the top 10 scores across sessions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::MAX_HIGH_SCORES;
use crate::persistence::{self, StorageError};

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub player_name: String,
    pub score: u64,
    /// When the run ended (RFC 3339 on disk)
    pub timestamp: DateTime<Utc>,
}

/// High score leaderboard, sorted by descending score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    ///
    /// Every score gets in while there is room; once full, it must beat the
    /// lowest entry.
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(
        &mut self,
        player_name: &str,
        score: u64,
        timestamp: DateTime<Utc>,
    ) -> Option<usize> {
        let rank = self.potential_rank(score)?;

        // Ties go after existing entries
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                player_name: player_name.to_string(),
                score,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("{} placed #{} with {}", player_name, rank, score);
        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (0 when empty)
    pub fn top_score(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// The best `n` entries
    pub fn top(&self, n: usize) -> &[HighScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Load from `path`; a missing file is an empty leaderboard
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        match persistence::load_json::<Self>(path) {
            Ok(mut scores) => {
                // Hand-edited files may be unsorted or oversized
                scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
                scores.entries.truncate(MAX_HIGH_SCORES);
                log::info!("Loaded {} high scores", scores.entries.len());
                Ok(scores)
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high scores found, starting fresh");
                Ok(Self::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Save to `path`
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        persistence::save_json(path, self)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("ann", 5, at(0)), Some(1));
        assert_eq!(scores.add_score("bob", 9, at(1)), Some(1));
        assert_eq!(scores.add_score("cat", 7, at(2)), Some(2));

        let order: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![9, 7, 5]);
        assert_eq!(scores.top_score(), 9);
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut scores = HighScores::new();
        scores.add_score("first", 4, at(0));
        assert_eq!(scores.add_score("second", 4, at(1)), Some(2));
        assert_eq!(scores.entries[0].player_name, "first");
    }

    #[test]
    fn test_bounded_to_ten() {
        let mut scores = HighScores::new();
        for i in 1..=10 {
            scores.add_score("p", i * 10, at(i as i64));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Doesn't beat the lowest (10)
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score("late", 10, at(99)), None);

        assert_eq!(scores.add_score("late", 55, at(100)), Some(6));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(20));
    }

    #[test]
    fn test_zero_score_recorded_while_room() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("new", 0, at(0)), Some(1));
    }

    #[test]
    fn test_top_n() {
        let mut scores = HighScores::new();
        for i in 0..8 {
            scores.add_score("p", i, at(i as i64));
        }
        assert_eq!(scores.top(5).len(), 5);
        assert_eq!(scores.top(5)[0].score, 7);
        assert_eq!(HighScores::new().top(5).len(), 0);
        assert_eq!(HighScores::new().top_score(), 0);
    }

    #[test]
    fn test_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");

        assert!(HighScores::load(&path).unwrap().is_empty());

        let mut scores = HighScores::new();
        scores.add_score("ann", 12, at(0));
        scores.add_score("bob", 3, at(5));
        scores.save(&path).unwrap();

        let loaded = HighScores::load(&path).unwrap();
        assert_eq!(loaded, scores);
    }

    #[test]
    fn test_load_resorts_hand_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(
            &path,
            r#"{"entries":[
                {"player_name":"a","score":1,"timestamp":"2024-01-01T00:00:00Z"},
                {"player_name":"b","score":8,"timestamp":"2024-01-02T00:00:00Z"}
            ]}"#,
        )
        .unwrap();

        let loaded = HighScores::load(&path).unwrap();
        assert_eq!(loaded.entries[0].player_name, "b");
    }
}
