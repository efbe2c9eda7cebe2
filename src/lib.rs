//! Gap Runner - A side-scrolling gap runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, scoring, collisions)
//! - `session`: Host glue (asset readiness gate, high score recording)
//! - `highscores`: Ranked top-10 leaderboard
//! - `persistence`: JSON file storage
//! - `settings`: Player preferences and simulation tuning

pub mod highscores;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use session::{AssetGate, Session, SessionError};
pub use settings::Settings;
pub use sim::{ConfigError, GameLoop, SimConfig, Snapshot};

/// Default tuning constants
///
/// Time is measured in frames: a `dt` of 1.0 is one tick at the nominal 60 Hz
/// frame rate, so speeds are pixels/frame and gravity is pixels/frame².
pub mod consts {
    /// Nominal frame delta
    pub const NOMINAL_DT: f32 = 1.0;
    /// Largest delta the host feeds in one tick (long stalls are clamped)
    pub const MAX_DT: f32 = 4.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -9.0;

    /// Obstacle scroll speed (pixels/frame)
    pub const SCROLL_SPEED: f32 = 5.0;

    /// Gap size range
    pub const MIN_GAP: f32 = 100.0;
    pub const MAX_GAP: f32 = 200.0;
    /// Fraction of the playfield height kept clear above and below every gap
    pub const GAP_MARGIN_FRACTION: f32 = 0.1;

    /// Spawn a new obstacle once the last one is this fraction of the width in
    pub const SPAWN_SPACING_FRACTION: f32 = 0.5;
    /// Scoring line (and actor column) as a fraction of the width
    pub const SCORING_LINE_FRACTION: f32 = 0.5;

    /// Obstacle half width (52px pipe sprite)
    pub const OBSTACLE_HALF_WIDTH: f32 = 26.0;
    /// Actor collision radius
    pub const ACTOR_RADIUS: f32 = 12.0;

    /// Number of entries kept on the leaderboard
    pub const MAX_HIGH_SCORES: usize = 10;
}
