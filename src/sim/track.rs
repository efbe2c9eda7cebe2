//! Scrolling obstacle track
//!
//! Obstacles are kept in creation order, which is also left-to-right order
//! because every obstacle scrolls at the same speed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::gap::{GapGeometry, GapParams, RandomGapPolicy};

/// A pipe pair with a passable gap
///
/// The gap geometry is fixed at creation; only the track moves an obstacle
/// or marks it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    id: u32,
    x: f32,
    gap: GapGeometry,
    scored: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, gap: GapGeometry) -> Self {
        Self {
            id,
            x,
            gap,
            scored: false,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Horizontal centre
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn gap(&self) -> GapGeometry {
        self.gap
    }

    #[inline]
    pub fn gap_top_y(&self) -> f32 {
        self.gap.gap_top_y
    }

    #[inline]
    pub fn gap_height(&self) -> f32 {
        self.gap.gap_height
    }

    #[inline]
    pub fn scored(&self) -> bool {
        self.scored
    }

    /// Whether `x` lies within this obstacle's horizontal extent
    #[inline]
    pub fn spans_x(&self, x: f32, half_width: f32) -> bool {
        x >= self.x - half_width && x <= self.x + half_width
    }
}

/// Emitted once per obstacle when it crosses the scoring line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEvent {
    pub obstacle_id: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTrack {
    obstacles: Vec<Obstacle>,
    half_width: f32,
    next_id: u32,
}

impl ObstacleTrack {
    pub fn new(obstacle_half_width: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            half_width: obstacle_half_width,
            next_id: 1,
        }
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Most recently spawned (rightmost) obstacle
    pub fn last(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// Obstacles are removed once they are fully off the left edge
    #[inline]
    pub fn prune_x(&self) -> f32 {
        -self.half_width
    }

    /// Drop every obstacle and restart id allocation
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.next_id = 1;
    }

    /// Append an obstacle at `x` with the given gap
    pub fn push(&mut self, x: f32, gap: GapGeometry) -> &Obstacle {
        let id = self.next_id;
        self.next_id += 1;
        self.obstacles.push(Obstacle::new(id, x, gap));
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every obstacle left by `delta_distance` and prune off-screen ones
    pub fn advance(&mut self, delta_distance: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.x -= delta_distance;
        }
        let prune_x = self.prune_x();
        self.obstacles.retain(|o| o.x >= prune_x);
    }

    /// Spawn a new obstacle at the right edge if the track is empty or the
    /// last obstacle has moved `spawn_spacing_fraction` of the width inward
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        playfield_width: f32,
        spawn_spacing_fraction: f32,
        policy: &mut RandomGapPolicy<R>,
        params: &GapParams,
    ) -> Option<&Obstacle> {
        let threshold = playfield_width - playfield_width * spawn_spacing_fraction;
        let due = self.obstacles.last().is_none_or(|last| last.x < threshold);
        if !due {
            return None;
        }

        let gap = policy.next_obstacle_geometry(params);
        Some(self.push(playfield_width, gap))
    }

    /// Mark every unscored obstacle left of `scoring_line_x` as scored
    ///
    /// Each obstacle yields at most one event over its lifetime.
    pub fn collect_scoring_events(&mut self, scoring_line_x: f32) -> Vec<ScoringEvent> {
        self.obstacles
            .iter_mut()
            .filter(|o| !o.scored && o.x < scoring_line_x)
            .map(|o| {
                o.scored = true;
                ScoringEvent { obstacle_id: o.id }
            })
            .collect()
    }

    /// The obstacle whose extent contains `x`, if any
    pub fn obstacle_at(&self, x: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.spans_x(x, self.half_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const GAP: GapGeometry = GapGeometry {
        gap_top_y: 300.0,
        gap_height: 150.0,
    };

    fn spawner() -> (RandomGapPolicy<Pcg32>, GapParams) {
        (
            RandomGapPolicy::new(Pcg32::seed_from_u64(3)),
            GapParams::new(800.0, 100.0, 200.0, 0.1).unwrap(),
        )
    }

    #[test]
    fn test_spawn_on_empty_track() {
        let (mut policy, params) = spawner();
        let mut track = ObstacleTrack::new(26.0);

        let spawned = track.maybe_spawn(600.0, 0.5, &mut policy, &params);
        assert_eq!(spawned.map(|o| o.x()), Some(600.0));
        assert_eq!(track.len(), 1);

        // Last obstacle hasn't moved yet - no second spawn
        assert!(track.maybe_spawn(600.0, 0.5, &mut policy, &params).is_none());
    }

    #[test]
    fn test_spawn_after_threshold() {
        let (mut policy, params) = spawner();
        let mut track = ObstacleTrack::new(26.0);
        track.maybe_spawn(600.0, 0.5, &mut policy, &params);

        // Exactly on the threshold is not past it
        track.advance(300.0);
        assert!(track.maybe_spawn(600.0, 0.5, &mut policy, &params).is_none());

        track.advance(1.0);
        assert!(track.maybe_spawn(600.0, 0.5, &mut policy, &params).is_some());
        assert_eq!(track.len(), 2);

        let ids: Vec<u32> = track.obstacles().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_advance_prunes_off_screen() {
        let mut track = ObstacleTrack::new(26.0);
        track.push(10.0, GAP);
        track.push(200.0, GAP);

        track.advance(30.0);
        assert_eq!(track.len(), 2); // first at -20, still partly visible

        track.advance(10.0);
        assert_eq!(track.len(), 1); // first at -30, fully gone
        assert_eq!(track.obstacles()[0].x(), 160.0);
    }

    #[test]
    fn test_scoring_once_per_obstacle() {
        let mut track = ObstacleTrack::new(26.0);
        track.push(305.0, GAP);

        assert!(track.collect_scoring_events(300.0).is_empty());

        track.advance(10.0);
        let events = track.collect_scoring_events(300.0);
        assert_eq!(events, vec![ScoringEvent { obstacle_id: 1 }]);
        assert!(track.obstacles()[0].scored());

        // Still past the line - no second event
        assert!(track.collect_scoring_events(300.0).is_empty());

        // Move it back across the line and past it again
        track.obstacles[0].x = 400.0;
        track.advance(150.0);
        assert!(track.collect_scoring_events(300.0).is_empty());
    }

    #[test]
    fn test_multiple_events_in_one_pass() {
        let mut track = ObstacleTrack::new(26.0);
        track.push(100.0, GAP);
        track.push(200.0, GAP);
        track.push(400.0, GAP);

        let events = track.collect_scoring_events(300.0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].obstacle_id, 1);
        assert_eq!(events[1].obstacle_id, 2);
    }

    #[test]
    fn test_obstacle_at() {
        let mut track = ObstacleTrack::new(26.0);
        track.push(300.0, GAP);
        track.push(600.0, GAP);

        assert_eq!(track.obstacle_at(274.0).map(|o| o.id()), Some(1));
        assert_eq!(track.obstacle_at(326.0).map(|o| o.id()), Some(1));
        assert!(track.obstacle_at(327.0).is_none());
        assert_eq!(track.obstacle_at(590.0).map(|o| o.id()), Some(2));
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut track = ObstacleTrack::new(26.0);
        track.push(300.0, GAP);
        track.clear();
        assert!(track.is_empty());
        assert_eq!(track.push(600.0, GAP).id(), 1);
    }
}
