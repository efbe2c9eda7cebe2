//! Game state and read-only views for the host
//!
//! The host never mutates any of this; it calls `GameLoop::advance` and
//! `GameLoop::jump`, then re-reads a [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::track::Obstacle;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Built but not yet started (transient: construction and reset start immediately)
    Ready,
    /// Active gameplay
    Running,
    /// Run ended; terminal until reset
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Actor crossed the ceiling or the floor
    OutOfBounds,
    /// Actor hit an obstacle pipe
    Collision,
}

/// Score and terminal flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u64,
    pub is_over: bool,
    /// Set together with `is_over`
    pub end_cause: Option<EndCause>,
    /// Ticks simulated this run
    pub time_ticks: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run over; returns false if it already was
    pub fn end(&mut self, cause: EndCause) -> bool {
        if self.is_over {
            return false;
        }
        self.is_over = true;
        self.end_cause = Some(cause);
        true
    }
}

/// What happened during one `advance` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles that crossed the scoring line this tick
    pub scored: u32,
    /// Set on the tick the run ended
    pub ended: Option<EndCause>,
}

/// Render-ready view of one obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    /// Horizontal centre
    pub x: f32,
    pub half_width: f32,
    pub gap_top_y: f32,
    pub gap_height: f32,
    pub scored: bool,
    /// Top pipe spans `[0, top_pipe_height]`
    pub top_pipe_height: f32,
    /// Bottom pipe spans `[bottom_pipe_y, bottom_pipe_y + bottom_pipe_height]`
    pub bottom_pipe_y: f32,
    pub bottom_pipe_height: f32,
}

impl ObstacleView {
    pub fn new(obstacle: &Obstacle, half_width: f32, playfield_height: f32) -> Self {
        let bottom_pipe_y = obstacle.gap_top_y() + obstacle.gap_height();
        Self {
            id: obstacle.id(),
            x: obstacle.x(),
            half_width,
            gap_top_y: obstacle.gap_top_y(),
            gap_height: obstacle.gap_height(),
            scored: obstacle.scored(),
            top_pipe_height: obstacle.gap_top_y(),
            bottom_pipe_y,
            bottom_pipe_height: playfield_height - bottom_pipe_y,
        }
    }
}

/// Read-only frame snapshot for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Actor centre (x is the fixed actor column)
    pub actor: Vec2,
    pub actor_radius: f32,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub is_over: bool,
}
