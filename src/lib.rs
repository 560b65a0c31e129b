//! Sky Hopper - a one-button gravity arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `config`: Injected startup configuration (viewport dimensions, RNG seed)
//!
//! The simulation is headless. A shell feeds it discrete impulse and
//! spawn-timer events each tick and receives a plain-data render snapshot
//! back; window setup, input plumbing, and drawing all live outside.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError, Viewport};

/// Game tuning constants, in reference-viewport units (height 600).
/// `sim::Metrics` multiplies every length and speed by the viewport scale.
pub mod consts {
    /// Simulation tick rate (fixed timestep)
    pub const TICK_HZ: u32 = 60;
    /// Obstacle spawn timer period in milliseconds
    pub const SPAWN_PERIOD_MS: u32 = 1200;
    /// Spawn timer period in ticks at `TICK_HZ`
    pub const SPAWN_PERIOD_TICKS: u32 = SPAWN_PERIOD_MS * TICK_HZ / 1000;

    /// Viewport height the scale factor normalizes against
    pub const REFERENCE_HEIGHT: f32 = 600.0;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.25;
    /// Velocity assigned by an impulse (negative is up)
    pub const IMPULSE: f32 = -7.0;

    /// Actor bounding box
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 50.0;
    /// Extra multiplier on the actor's scale for visual proportion
    pub const ACTOR_SCALE_BOOST: f32 = 1.2;
    /// Actor spawn point as a fraction of the viewport
    pub const ACTOR_SPAWN_X: f32 = 0.25;
    pub const ACTOR_SPAWN_Y: f32 = 0.5;

    /// Obstacle rectangle size
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 400.0;
    /// Horizontal overshoot past the right edge where new pairs appear
    pub const SPAWN_OFFSET_X: f32 = 100.0;
    /// Candidate gate heights for a new pair's bottom rectangle top edge
    pub const GATE_HEIGHTS: [f32; 3] = [300.0, 400.0, 500.0];

    /// Level-1 horizontal obstacle speed per tick
    pub const BASE_SPEED: f32 = 5.0;
    /// Speed gained per difficulty level
    pub const SPEED_PER_LEVEL: f32 = 1.0;
    /// Level-1 vertical gap between a pair's rectangles
    pub const BASE_GAP: f32 = 200.0;
    /// Gap lost per difficulty level
    pub const GAP_PER_LEVEL: f32 = 10.0;
    /// Gap never shrinks below this
    pub const MIN_GAP: f32 = 140.0;
    /// Full points needed to advance one difficulty level
    pub const SCORE_PER_LEVEL: u32 = 20;

    /// Grace band above the screen before the top bound ends the round
    pub const TOP_GRACE: f32 = 100.0;
}
