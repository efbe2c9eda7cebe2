//! Collision detection between the actor and obstacle pipes
//!
//! The actor is a circle on a fixed column. An obstacle is only considered
//! while its horizontal extent contains that column; inside it, the actor's
//! circle must stay between the gap's top and bottom edges. Floor and ceiling
//! are handled by the actor's own bounds check.

use super::config::SimConfig;
use super::track::Obstacle;

/// Which pipe the actor touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapEdge {
    /// Top pipe (above the gap)
    Top,
    /// Bottom pipe (below the gap)
    Bottom,
}

/// Result of a collision probe
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Obstacle that was hit
    pub obstacle_id: u32,
    /// Pipe that was hit
    pub edge: GapEdge,
    /// How far the actor's circle reaches past the gap edge
    pub penetration: f32,
}

/// Check the actor's circle against one obstacle's gap (vertical test only)
pub fn actor_obstacle_collision(
    actor_y: f32,
    actor_radius: f32,
    obstacle: &Obstacle,
) -> Option<CollisionResult> {
    let top = obstacle.gap_top_y();
    let bottom = top + obstacle.gap_height();

    let over_top = top - (actor_y - actor_radius);
    if over_top > 0.0 {
        return Some(CollisionResult {
            obstacle_id: obstacle.id(),
            edge: GapEdge::Top,
            penetration: over_top,
        });
    }

    let under_bottom = (actor_y + actor_radius) - bottom;
    if under_bottom > 0.0 {
        return Some(CollisionResult {
            obstacle_id: obstacle.id(),
            edge: GapEdge::Bottom,
            penetration: under_bottom,
        });
    }

    None
}

/// Actor-versus-obstacles test for the actor's fixed column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    actor_x: f32,
    half_width: f32,
}

impl CollisionDetector {
    pub fn new(actor_x: f32, obstacle_half_width: f32) -> Self {
        Self {
            actor_x,
            half_width: obstacle_half_width,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.actor_x(), config.obstacle_half_width)
    }

    #[inline]
    pub fn actor_x(&self) -> f32 {
        self.actor_x
    }

    /// Find the obstacle hit this tick, if any
    pub fn probe(
        &self,
        actor_y: f32,
        actor_radius: f32,
        obstacles: &[Obstacle],
    ) -> Option<CollisionResult> {
        obstacles
            .iter()
            .filter(|o| o.spans_x(self.actor_x, self.half_width))
            .find_map(|o| actor_obstacle_collision(actor_y, actor_radius, o))
    }

    /// Whether the actor overlaps any obstacle pipe
    pub fn check(&self, actor_y: f32, actor_radius: f32, obstacles: &[Obstacle]) -> bool {
        self.probe(actor_y, actor_radius, obstacles).is_some()
    }
}
