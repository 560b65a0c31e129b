//! Per-tick render snapshot
//!
//! The simulation's only output: a plain-data description of everything a
//! renderer draws. Captured after each tick and treated as an immutable
//! handoff value, so a separate render thread can consume it without
//! touching live state.

use serde::Serialize;

use super::state::{GamePhase, GameState};

/// Animation phase advance per Playing tick, in radians. The renderer feeds
/// the phase to a sine for the limb-swing offsets.
const PHASE_PER_TICK: f32 = 0.1;

/// Actor pose for the renderer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActorPose {
    /// Center position
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    /// Sinusoidal limb-swing phase; frozen while GameOver
    pub animation_phase: f32,
}

/// An obstacle rectangle as the renderer draws it (top-left origin)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub lifecycle: GamePhase,
    pub actor: ActorPose,
    pub obstacles: Vec<FrameRect>,
    pub score: u32,
    pub level: u32,
    pub high_score: u32,
}

impl Frame {
    /// Snapshot the current state
    pub fn capture(state: &GameState) -> Self {
        let mut obstacles = Vec::with_capacity(state.obstacles.len() * 2);
        for pair in &state.obstacles {
            for rect in [&pair.top, &pair.bottom] {
                obstacles.push(FrameRect {
                    x: rect.left(),
                    y: rect.top(),
                    width: rect.size.x,
                    height: rect.size.y,
                });
            }
        }
        Self {
            lifecycle: state.phase,
            actor: ActorPose {
                x: state.actor.pos.x,
                y: state.actor.pos.y,
                width: state.actor.size.x,
                height: state.actor.size.y,
                velocity_y: state.actor.velocity_y,
                animation_phase: state.animation_clock as f32 * PHASE_PER_TICK,
            },
            obstacles,
            score: state.score(),
            level: state.difficulty.level,
            high_score: state.high_score,
        }
    }
}
