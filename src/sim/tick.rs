//! Variable timestep simulation tick
//!
//! `GameLoop` owns the actor, the obstacle track and the score for one game
//! session. Each `advance` runs a single ordered pipeline:
//!
//! 1. spawn an obstacle if the last one has moved far enough in
//! 2. scroll the track by `scroll_speed * dt`, pruning off-screen obstacles
//! 3. score obstacles that crossed the scoring line
//! 4. integrate the actor and check the floor/ceiling
//! 5. check the actor against obstacle pipes
//!
//! Scoring always reads the post-scroll track, and a tick is either applied
//! in full or (for `Over` and invalid `dt`) not at all.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::collision::CollisionDetector;
use super::config::SimConfig;
use super::error::ConfigError;
use super::gap::{GapParams, RandomGapPolicy};
use super::state::{EndCause, GamePhase, GameState, ObstacleView, Snapshot, TickReport};
use super::track::ObstacleTrack;

#[derive(Debug, Clone)]
pub struct GameLoop<R = Pcg32> {
    config: SimConfig,
    gap_params: GapParams,
    detector: CollisionDetector,
    policy: RandomGapPolicy<R>,
    phase: GamePhase,
    state: GameState,
    actor: Actor,
    track: ObstacleTrack,
}

impl GameLoop {
    /// Create a running game with a seeded PCG generator
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameLoop<R> {
    /// Create a running game drawing obstacle gaps from `rng`
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let gap_params = config.gap_params()?;

        let mut game = Self {
            detector: CollisionDetector::from_config(&config),
            policy: RandomGapPolicy::new(rng),
            phase: GamePhase::Ready,
            state: GameState::new(),
            actor: Actor::new(config.actor_start_y()),
            track: ObstacleTrack::new(config.obstacle_half_width),
            gap_params,
            config,
        };
        game.start();
        Ok(game)
    }

    fn start(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::Ready);
        self.phase = GamePhase::Running;
        log::info!(
            "Game started ({}x{} playfield)",
            self.config.playfield_width,
            self.config.playfield_height
        );
    }

    /// Begin a new game; the gap RNG continues its stream
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.actor = Actor::new(self.config.actor_start_y());
        self.track.clear();
        self.phase = GamePhase::Ready;
        self.start();
    }

    /// Apply the jump impulse (no-op unless running)
    pub fn jump(&mut self) {
        if self.phase == GamePhase::Running {
            self.actor.jump(self.config.jump_impulse);
        }
    }

    /// Advance the simulation by `dt` frames
    ///
    /// A zero `dt` still runs the pipeline: the spawn step can place an
    /// obstacle while every motion step moves nothing.
    pub fn advance(&mut self, dt: f32) -> TickReport {
        if self.phase != GamePhase::Running {
            return TickReport::default();
        }
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring tick with invalid dt {}", dt);
            return TickReport::default();
        }

        let config = &self.config;

        if let Some(obstacle) = self.track.maybe_spawn(
            config.playfield_width,
            config.spawn_spacing_fraction,
            &mut self.policy,
            &self.gap_params,
        ) {
            log::debug!(
                "Spawned obstacle {} (gap {:.1}..{:.1})",
                obstacle.id(),
                obstacle.gap_top_y(),
                obstacle.gap_top_y() + obstacle.gap_height()
            );
        }

        self.track.advance(config.scroll_speed * dt);

        let events = self.track.collect_scoring_events(config.scoring_line_x());
        let scored = events.len() as u32;
        self.state.score += u64::from(scored);
        for event in &events {
            log::debug!(
                "Obstacle {} passed, score {}",
                event.obstacle_id,
                self.state.score
            );
        }

        self.actor.integrate(dt, config.gravity);
        let out_of_bounds = self.actor.is_out_of_bounds(config.playfield_height);

        let hit = self
            .detector
            .check(self.actor.y(), config.actor_radius, self.track.obstacles());

        self.state.time_ticks += 1;

        let ended = if out_of_bounds {
            Some(EndCause::OutOfBounds)
        } else if hit {
            Some(EndCause::Collision)
        } else {
            None
        };

        if let Some(cause) = ended {
            self.state.end(cause);
            self.phase = GamePhase::Over;
            log::info!(
                "Game over ({:?}) after {} ticks, score {}",
                cause,
                self.state.time_ticks,
                self.state.score
            );
        }

        TickReport { scored, ended }
    }
}

impl<R> GameLoop<R> {
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    #[inline]
    pub fn track(&self) -> &ObstacleTrack {
        &self.track
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Read-only view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        let half_width = self.track.half_width();
        let height = self.config.playfield_height;
        Snapshot {
            phase: self.phase,
            actor: glam::Vec2::new(self.config.actor_x(), self.actor.y()),
            actor_radius: self.config.actor_radius,
            obstacles: self
                .track
                .obstacles()
                .iter()
                .map(|o| ObstacleView::new(o, half_width, height))
                .collect(),
            score: self.state.score,
            is_over: self.state.is_over,
        }
    }
}
