//! One player's game session
//!
//! Wraps a [`GameLoop`] with the pieces the host owns: the asset readiness
//! gate, the player's name and the leaderboard. The session refuses to tick
//! until assets are confirmed loaded, and records exactly one high score
//! entry each time a game ends.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::highscores::HighScores;
use crate::sim::{ConfigError, GameLoop, SimConfig, Snapshot, TickReport};

/// Asset readiness reported by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetGate {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("a player name is required to start a game")]
    EmptyPlayerName,
    #[error("assets are still loading")]
    AssetsNotReady,
    #[error("asset loading failed: {0}")]
    AssetsFailed(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug)]
pub struct Session {
    player_name: String,
    game: GameLoop,
    gate: AssetGate,
    high_scores: HighScores,
    /// Leaderboard rank of the last finished game
    last_rank: Option<usize>,
}

impl Session {
    pub fn new(
        player_name: &str,
        config: SimConfig,
        seed: u64,
        high_scores: HighScores,
    ) -> Result<Self, SessionError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }

        let game = GameLoop::new(config, seed)?;
        log::info!("Session for {} (seed {})", player_name, seed);

        Ok(Self {
            player_name: player_name.to_string(),
            game,
            gate: AssetGate::Pending,
            high_scores,
            last_rank: None,
        })
    }

    pub fn mark_assets_loaded(&mut self) {
        log::info!("Assets loaded");
        self.gate = AssetGate::Loaded;
    }

    pub fn mark_assets_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::error!("Asset loading failed: {}", reason);
        self.gate = AssetGate::Failed(reason);
    }

    pub fn gate(&self) -> &AssetGate {
        &self.gate
    }

    fn check_gate(&self) -> Result<(), SessionError> {
        match &self.gate {
            AssetGate::Loaded => Ok(()),
            AssetGate::Pending => Err(SessionError::AssetsNotReady),
            AssetGate::Failed(reason) => Err(SessionError::AssetsFailed(reason.clone())),
        }
    }

    /// Tick the game, stamping any high score with the current time
    pub fn advance(&mut self, dt: f32) -> Result<TickReport, SessionError> {
        self.advance_at(dt, Utc::now())
    }

    /// Tick the game; a game ending on this tick is recorded at `now`
    pub fn advance_at(&mut self, dt: f32, now: DateTime<Utc>) -> Result<TickReport, SessionError> {
        self.check_gate()?;

        let report = self.game.advance(dt);
        if report.ended.is_some() {
            let score = self.game.score();
            self.last_rank = self.high_scores.add_score(&self.player_name, score, now);
        }
        Ok(report)
    }

    /// Forward a jump; ignored until assets are loaded
    pub fn jump(&mut self) {
        if self.gate == AssetGate::Loaded {
            self.game.jump();
        }
    }

    /// Start a new game with the same player and leaderboard
    pub fn restart(&mut self) {
        self.game.reset();
        self.last_rank = None;
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Hand the leaderboard back to the host for saving
    pub fn into_high_scores(self) -> HighScores {
        self.high_scores
    }
}
