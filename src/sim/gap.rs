//! Obstacle gap generation
//!
//! Each obstacle is a pair of pipes with a passable gap between them. The gap
//! height is drawn uniformly from `[min_gap, max_gap]`, then its top edge is
//! drawn uniformly from the range that keeps a fixed margin clear at the top
//! and bottom of the playfield.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Vertical geometry of one obstacle's gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapGeometry {
    /// Top edge of the passable gap (pixels from top)
    pub gap_top_y: f32,
    /// Height of the passable gap
    pub gap_height: f32,
}

impl GapGeometry {
    /// Bottom edge of the passable gap
    #[inline]
    pub fn gap_bottom_y(&self) -> f32 {
        self.gap_top_y + self.gap_height
    }
}

/// Validated bounds for gap sampling
///
/// Only constructible through [`GapParams::new`], so sampling never sees an
/// empty range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapParams {
    playfield_height: f32,
    min_gap: f32,
    max_gap: f32,
    margin: f32,
}

impl GapParams {
    pub fn new(
        playfield_height: f32,
        min_gap: f32,
        max_gap: f32,
        margin_fraction: f32,
    ) -> Result<Self, ConfigError> {
        ConfigError::require_positive("playfield_height", playfield_height)?;
        ConfigError::require_positive("min_gap", min_gap)?;
        ConfigError::require_positive("max_gap", max_gap)?;
        if !(margin_fraction.is_finite() && (0.0..0.5).contains(&margin_fraction)) {
            return Err(ConfigError::FractionOutOfRange {
                field: "gap_margin_fraction",
                range: "[0, 0.5)",
                value: margin_fraction,
            });
        }
        if min_gap > max_gap {
            return Err(ConfigError::InvertedGapRange { min_gap, max_gap });
        }

        let margin = margin_fraction * playfield_height;
        if max_gap + 2.0 * margin >= playfield_height {
            return Err(ConfigError::GapDoesNotFit {
                max_gap,
                margin,
                playfield_height,
            });
        }

        Ok(Self {
            playfield_height,
            min_gap,
            max_gap,
            margin,
        })
    }

    #[inline]
    pub fn playfield_height(&self) -> f32 {
        self.playfield_height
    }

    #[inline]
    pub fn min_gap(&self) -> f32 {
        self.min_gap
    }

    #[inline]
    pub fn max_gap(&self) -> f32 {
        self.max_gap
    }

    /// Clear band reserved above and below every gap
    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

/// Uniform random gap policy over a caller-supplied RNG
#[derive(Debug, Clone)]
pub struct RandomGapPolicy<R> {
    rng: R,
}

impl<R: Rng> RandomGapPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the geometry for the next obstacle
    pub fn next_obstacle_geometry(&mut self, params: &GapParams) -> GapGeometry {
        let gap_height = self.rng.random_range(params.min_gap..=params.max_gap);
        let lowest_top = params.margin;
        let highest_top = params.playfield_height - gap_height - params.margin;
        let gap_top_y = self.rng.random_range(lowest_top..=highest_top);

        GapGeometry {
            gap_top_y,
            gap_height,
        }
    }
}
