//! Game state and core simulation types
//!
//! Every gameplay variable lives in one owned `GameState`; the tick function
//! and its collaborators receive it explicitly, never through globals, so
//! independent game instances can run side by side.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::metrics::Metrics;
use super::rect::Rect;
use crate::config::Config;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Physics, spawning, and scoring advance
    Playing,
    /// Frozen until a reset impulse
    GameOver,
}

/// The player figure
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// Center position; x never changes after initialization
    pub pos: Vec2,
    /// Vertical velocity, positive is down
    pub velocity_y: f32,
    /// Bounding box size
    pub size: Vec2,
}

impl Actor {
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            pos: metrics.actor_spawn,
            velocity_y: 0.0,
            size: metrics.actor_size,
        }
    }

    /// Accelerate downward; once per Playing tick
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
    }

    /// An impulse overwrites the velocity, it does not add to it
    pub fn apply_impulse(&mut self, impulse: f32) {
        self.velocity_y = impulse;
    }

    /// Move by the current velocity, after gravity and any impulse
    pub fn integrate(&mut self) {
        self.pos.y += self.velocity_y;
    }

    /// Back to the spawn point, at rest
    pub fn reset(&mut self, metrics: &Metrics) {
        self.pos = metrics.actor_spawn;
        self.velocity_y = 0.0;
    }

    /// Current bounding box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A gated obstacle: two rectangles sharing a horizontal center, separated
/// by the gap that was current when the pair spawned
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Set once the pair's center has crossed the actor's x
    pub scored: bool,
}

impl ObstaclePair {
    /// Build a pair from the gate height of the bottom rectangle's top edge.
    /// Geometry and gap are frozen here; a later difficulty change only
    /// affects pairs spawned afterward.
    pub fn new(spawn_x: f32, gate_height: f32, gap: f32, size: Vec2) -> Self {
        let bottom = Rect::from_top_center(Vec2::new(spawn_x, gate_height), size);
        let top = Rect::from_bottom_center(Vec2::new(spawn_x, gate_height - gap), size);
        Self {
            top,
            bottom,
            scored: false,
        }
    }

    /// Shared horizontal center
    pub fn center_x(&self) -> f32 {
        self.bottom.center.x
    }

    /// Vertical opening between the two rectangles
    pub fn gap(&self) -> f32 {
        self.bottom.top() - self.top.bottom()
    }

    /// Slide left by the current speed
    pub fn advance(&mut self, speed: f32) {
        self.top.center.x -= speed;
        self.bottom.center.x -= speed;
    }
}

/// Complete game state, owned by the loop thread
#[derive(Debug, Clone)]
pub struct GameState {
    /// Viewport-derived constants, fixed for the process
    pub metrics: Metrics,
    pub phase: GamePhase,
    pub actor: Actor,
    /// Spawn-ordered; grows during a round, cleared on reset
    pub obstacles: Vec<ObstaclePair>,
    /// Current rates, refreshed from score each Playing tick
    pub difficulty: Difficulty,
    /// Score in half-point units: one half-point per rectangle of a
    /// crossed pair, so a pair is worth a full point
    score_half: u32,
    /// Best full-point score across rounds this process
    pub high_score: u32,
    /// Playing-only tick counter, drives the renderer's limb-swing phase
    pub animation_clock: u32,
    /// Gate-height RNG; deliberately not reset between rounds
    rng: Pcg32,
}

impl GameState {
    /// Fresh state in the Playing phase
    pub fn new(config: Config) -> Self {
        let metrics = Metrics::new(config.viewport);
        Self {
            metrics,
            phase: GamePhase::Playing,
            actor: Actor::new(&metrics),
            obstacles: Vec::new(),
            difficulty: Difficulty::base(&metrics),
            score_half: 0,
            high_score: 0,
            animation_clock: 0,
            rng: Pcg32::seed_from_u64(config.seed),
        }
    }

    /// Full points scored this round
    pub fn score(&self) -> u32 {
        self.score_half / 2
    }

    /// One half-point per rectangle of a crossed pair
    pub(crate) fn award_pair(&mut self) {
        self.score_half += 2;
    }

    /// Spawn a pair off-screen right with a random gate height and the
    /// current gap
    pub fn spawn_pair(&mut self) {
        let idx = self.rng.random_range(0..self.metrics.gate_heights.len());
        let gate = self.metrics.gate_heights[idx];
        self.obstacles.push(ObstaclePair::new(
            self.metrics.spawn_x,
            gate,
            self.difficulty.gap,
            self.metrics.obstacle_size,
        ));
    }

    /// Slide every pair left by the current speed
    pub fn advance_obstacles(&mut self) {
        let speed = self.difficulty.speed;
        for pair in &mut self.obstacles {
            pair.advance(speed);
        }
    }

    /// Round restart: everything back to base values, high score kept,
    /// RNG stream continues
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.actor.reset(&self.metrics);
        self.score_half = 0;
        self.difficulty = Difficulty::base(&self.metrics);
        self.animation_clock = 0;
        self.phase = GamePhase::Playing;
    }
}
