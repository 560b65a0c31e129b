//! Collision and bounds tests
//!
//! Read-only over actor and obstacle geometry. The tick orchestrator flips
//! the phase when a test reports a hit; nothing here mutates state.

use super::state::{Actor, ObstaclePair};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Actor overlapped an obstacle rectangle
    Obstacle,
    /// Actor left the playable vertical band
    OutOfBounds,
}

/// Test the actor's bounding box against every obstacle rectangle
pub fn actor_hits_obstacle(actor: &Actor, obstacles: &[ObstaclePair]) -> bool {
    let bounds = actor.bounds();
    obstacles
        .iter()
        .any(|pair| bounds.intersects(&pair.top) || bounds.intersects(&pair.bottom))
}

/// The top bound allows a grace band above the screen; the floor does not.
/// Round ends when `top < -top_grace` or `bottom >= height`.
pub fn actor_out_of_bounds(actor: &Actor, top_grace: f32, height: f32) -> bool {
    let bounds = actor.bounds();
    bounds.top() < -top_grace || bounds.bottom() >= height
}

/// Combined per-tick check, obstacles first
pub fn check(
    actor: &Actor,
    obstacles: &[ObstaclePair],
    top_grace: f32,
    height: f32,
) -> Option<Collision> {
    if actor_hits_obstacle(actor, obstacles) {
        return Some(Collision::Obstacle);
    }
    if actor_out_of_bounds(actor, top_grace, height) {
        return Some(Collision::OutOfBounds);
    }
    None
}
