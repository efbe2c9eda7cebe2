//! Configuration errors
//!
//! Every rule `SimConfig::validate` enforces has its own variant, so the host
//! can report exactly which constant is out of range.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must lie in {range} (got {value})")]
    FractionOutOfRange {
        field: &'static str,
        range: &'static str,
        value: f32,
    },
    #[error("min_gap ({min_gap}) is larger than max_gap ({max_gap})")]
    InvertedGapRange { min_gap: f32, max_gap: f32 },
    #[error(
        "max_gap ({max_gap}) plus a {margin} margin above and below does not fit a playfield of height {playfield_height}"
    )]
    GapDoesNotFit {
        max_gap: f32,
        margin: f32,
        playfield_height: f32,
    },
    #[error("min_gap ({min_gap}) leaves no room for an actor of diameter {actor_diameter}")]
    GapNarrowerThanActor { min_gap: f32, actor_diameter: f32 },
    #[error("spawn spacing ({spacing}) is narrower than an obstacle ({obstacle_width}); obstacles would overlap")]
    SpawnSpacingTooSmall { spacing: f32, obstacle_width: f32 },
    #[error("jump_impulse must be negative (upward), got {0}")]
    JumpNotUpward(f32),
}

impl ConfigError {
    /// Check a value is finite and strictly positive
    pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { field, value })
        }
    }

    pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::Negative { field, value })
        }
    }
}
