//! Viewport-derived gameplay metrics
//!
//! A single scale factor (viewport height / 600) normalizes every
//! size-dependent constant, so gameplay feel is invariant across screen
//! sizes. Computed once at startup and held constant for the process.

use glam::Vec2;

use crate::config::Viewport;
use crate::consts::*;

/// All size- and speed-dependent constants, pre-multiplied by scale
#[derive(Debug, Clone, Copy)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    /// `height / 600`
    pub scale: f32,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity assigned by an impulse
    pub impulse: f32,
    /// Actor bounding box
    pub actor_size: Vec2,
    /// Actor start/reset position
    pub actor_spawn: Vec2,
    /// Obstacle rectangle size
    pub obstacle_size: Vec2,
    /// X where new pairs appear, off-screen right
    pub spawn_x: f32,
    /// Candidate gate heights for new pairs
    pub gate_heights: [f32; 3],
    /// Gap floor for the difficulty curve
    pub min_gap: f32,
    /// Grace band above the screen before the top bound ends the round
    pub top_grace: f32,
}

impl Metrics {
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        let scale = height / REFERENCE_HEIGHT;
        let actor_scale = scale * ACTOR_SCALE_BOOST;
        Self {
            width,
            height,
            scale,
            gravity: GRAVITY * scale,
            impulse: IMPULSE * scale,
            actor_size: Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT) * actor_scale,
            actor_spawn: Vec2::new(width * ACTOR_SPAWN_X, height * ACTOR_SPAWN_Y),
            obstacle_size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT) * scale,
            spawn_x: width + SPAWN_OFFSET_X * scale,
            gate_heights: GATE_HEIGHTS.map(|h| h * scale),
            min_gap: MIN_GAP * scale,
            top_grace: TOP_GRACE * scale,
        }
    }
}
