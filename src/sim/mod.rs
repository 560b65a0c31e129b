//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed 60 Hz timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! The shell feeds `TickInput` events in, `tick` advances one step, and
//! `Frame::capture` hands the renderer an immutable snapshot.

pub mod collision;
pub mod difficulty;
pub mod frame;
pub mod metrics;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::Collision;
pub use difficulty::Difficulty;
pub use frame::{ActorPose, Frame, FrameRect};
pub use metrics::Metrics;
pub use rect::Rect;
pub use state::{Actor, GamePhase, GameState, ObstaclePair};
pub use tick::{TickInput, tick};
