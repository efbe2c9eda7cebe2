//! Player preferences and simulation tuning
//!
//! Persisted separately from the leaderboard as a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::{self, StorageError};
use crate::sim::SimConfig;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name recorded with high scores
    pub player_name: String,
    /// Fixed obstacle seed (None = seed from the clock each run)
    pub seed: Option<u64>,
    /// Where the leaderboard lives
    pub high_scores_path: PathBuf,
    /// Simulation tuning
    pub sim: SimConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            seed: None,
            high_scores_path: PathBuf::from("highscores.json"),
            sim: SimConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults if absent or unreadable
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if e.is_not_found() => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, StorageError> {
        persistence::load_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        persistence::save_json(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        assert!(Settings::try_load(&path).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.player_name = "ann".into();
        settings.seed = Some(42);
        settings.sim.gravity = 0.8;
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "player_name": "bob", "sim": { "scroll_speed": 7.0 } }"#)
            .unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.player_name, "bob");
        assert_eq!(settings.sim.scroll_speed, 7.0);
        assert_eq!(settings.sim.min_gap, SimConfig::default().min_gap);
    }
}
