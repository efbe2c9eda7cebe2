//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - One ordered pipeline per tick (spawn, scroll, score, integrate, collide)
//! - Stable iteration order (by creation order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod config;
pub mod error;
pub mod gap;
pub mod state;
pub mod tick;
pub mod track;

pub use actor::Actor;
pub use collision::{CollisionDetector, CollisionResult, GapEdge, actor_obstacle_collision};
pub use config::SimConfig;
pub use error::ConfigError;
pub use gap::{GapGeometry, GapParams, RandomGapPolicy};
pub use state::{EndCause, GamePhase, GameState, ObstacleView, Snapshot, TickReport};
pub use tick::GameLoop;
pub use track::{Obstacle, ObstacleTrack, ScoringEvent};
