//! The player-controlled actor
//!
//! Continuous-velocity motion model:
//!
//! ```text
//! jump():        v = jump_impulse
//! integrate(dt): v += gravity * dt
//!                y += v
//! ```
//!
//! Only gravity scales with `dt`; the velocity is applied to the position as
//! a per-tick displacement. A jump replaces the current velocity rather than
//! adding to it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Vertical position (pixels from top of playfield)
    y: f32,
    /// Vertical velocity (pixels/frame, positive = down)
    vel: f32,
}

impl Actor {
    pub fn new(y: f32) -> Self {
        Self { y, vel: 0.0 }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.vel
    }

    /// Set the velocity to the jump impulse
    pub fn jump(&mut self, jump_impulse: f32) {
        self.vel = jump_impulse;
    }

    /// Advance one tick under gravity; returns the new position
    pub fn integrate(&mut self, dt: f32, gravity: f32) -> f32 {
        self.vel += gravity * dt;
        self.y += self.vel;
        self.y
    }

    /// Above the ceiling or below the floor
    #[inline]
    pub fn is_out_of_bounds(&self, playfield_height: f32) -> bool {
        self.y > playfield_height || self.y < 0.0
    }
}
