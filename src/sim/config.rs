//! Simulation tuning
//!
//! Every constant the simulation reads comes from here, so a host can load a
//! different tuning from disk without touching the core.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::gap::GapParams;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Downward acceleration (pixels/frame²)
    pub gravity: f32,
    /// Velocity set by a jump; negative is upward
    pub jump_impulse: f32,
    /// Obstacle scroll speed (pixels/frame)
    pub scroll_speed: f32,
    pub min_gap: f32,
    pub max_gap: f32,
    /// Fraction of the height reserved above and below every gap
    pub gap_margin_fraction: f32,
    /// Fraction of the width the last obstacle must travel before the next spawns
    pub spawn_spacing_fraction: f32,
    /// Scoring line position as a fraction of the width; the actor sits on it
    pub scoring_line_fraction: f32,
    pub obstacle_half_width: f32,
    pub actor_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            min_gap: MIN_GAP,
            max_gap: MAX_GAP,
            gap_margin_fraction: GAP_MARGIN_FRACTION,
            spawn_spacing_fraction: SPAWN_SPACING_FRACTION,
            scoring_line_fraction: SCORING_LINE_FRACTION,
            obstacle_half_width: OBSTACLE_HALF_WIDTH,
            actor_radius: ACTOR_RADIUS,
        }
    }
}

impl SimConfig {
    /// Check every constant; the first violated rule is reported
    ///
    /// Besides the gap-fit precondition this also rejects a jump impulse that
    /// is not upward, a `min_gap` no wider than the actor, spawn spacing
    /// narrower than an obstacle and a scoring line off the playfield.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("playfield_width", self.playfield_width)?;
        ConfigError::require_positive("playfield_height", self.playfield_height)?;
        ConfigError::require_non_negative("gravity", self.gravity)?;
        ConfigError::require_positive("scroll_speed", self.scroll_speed)?;
        ConfigError::require_positive("obstacle_half_width", self.obstacle_half_width)?;
        ConfigError::require_positive("actor_radius", self.actor_radius)?;

        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }

        if !(self.spawn_spacing_fraction.is_finite()
            && self.spawn_spacing_fraction > 0.0
            && self.spawn_spacing_fraction <= 1.0)
        {
            return Err(ConfigError::FractionOutOfRange {
                field: "spawn_spacing_fraction",
                range: "(0, 1]",
                value: self.spawn_spacing_fraction,
            });
        }

        if !(self.scoring_line_fraction.is_finite()
            && self.scoring_line_fraction > 0.0
            && self.scoring_line_fraction < 1.0)
        {
            return Err(ConfigError::FractionOutOfRange {
                field: "scoring_line_fraction",
                range: "(0, 1)",
                value: self.scoring_line_fraction,
            });
        }

        self.gap_params()?;

        let actor_diameter = 2.0 * self.actor_radius;
        if actor_diameter >= self.min_gap {
            return Err(ConfigError::GapNarrowerThanActor {
                min_gap: self.min_gap,
                actor_diameter,
            });
        }

        let spacing = self.spawn_spacing();
        let obstacle_width = 2.0 * self.obstacle_half_width;
        if spacing < obstacle_width {
            return Err(ConfigError::SpawnSpacingTooSmall {
                spacing,
                obstacle_width,
            });
        }

        Ok(())
    }

    /// Validated gap sampling bounds
    pub fn gap_params(&self) -> Result<GapParams, ConfigError> {
        GapParams::new(
            self.playfield_height,
            self.min_gap,
            self.max_gap,
            self.gap_margin_fraction,
        )
    }

    /// Minimum horizontal distance between consecutive obstacles
    #[inline]
    pub fn spawn_spacing(&self) -> f32 {
        self.playfield_width * self.spawn_spacing_fraction
    }

    /// Horizontal position of the scoring line
    #[inline]
    pub fn scoring_line_x(&self) -> f32 {
        self.playfield_width * self.scoring_line_fraction
    }

    /// Fixed horizontal position of the actor (on the scoring line)
    #[inline]
    pub fn actor_x(&self) -> f32 {
        self.scoring_line_x()
    }

    /// Where the actor starts each game
    #[inline]
    pub fn actor_start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }
}
