//! Sky Hopper entry point
//!
//! Headless demo shell. Window setup, input plumbing, and drawing are the
//! platform's job; here a scripted autopilot stands in for the player, the
//! tick counter stands in for the 1200 ms spawn timer, and the final render
//! snapshot is dumped as JSON.

use sky_hopper::config::{Config, Viewport};
use sky_hopper::consts::{SPAWN_PERIOD_TICKS, TICK_HZ};
use sky_hopper::sim::{Frame, GamePhase, GameState, TickInput, tick};

/// Demo length in ticks (30 seconds of play)
const DEMO_TICKS: u32 = 30 * TICK_HZ;

fn main() {
    env_logger::init();

    let viewport = match Viewport::new(400, 600) {
        Ok(viewport) => viewport,
        Err(err) => {
            eprintln!("invalid viewport: {err}");
            std::process::exit(1);
        }
    };
    let mut state = GameState::new(Config::new(viewport, 0xC0FFEE));
    log::info!(
        "demo starting: viewport {}x{}, {} ticks",
        viewport.width,
        viewport.height,
        DEMO_TICKS
    );

    // Wall tick counter; the spawn timer derives from it, the Playing-only
    // animation clock does not
    for clock in 1..=DEMO_TICKS {
        let input = TickInput {
            impulses: if autopilot(&state) { 1 } else { 0 },
            spawn: clock % SPAWN_PERIOD_TICKS == 0,
        };
        tick(&mut state, &input);
    }

    log::info!("demo finished: high score {}", state.high_score);
    let frame = Frame::capture(&state);
    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("frame serialization failed: {err}"),
    }
}

/// Flap when sinking below the next gate's center, and tap to restart after
/// a round ends. Good enough to clear a handful of gates per round.
fn autopilot(state: &GameState) -> bool {
    if state.phase == GamePhase::GameOver {
        return true;
    }
    let actor = &state.actor;
    let target_y = state
        .obstacles
        .iter()
        .find(|pair| !pair.scored && pair.center_x() >= actor.pos.x)
        .map(|pair| (pair.top.bottom() + pair.bottom.top()) / 2.0)
        .unwrap_or(state.metrics.height * 0.5);
    actor.velocity_y > 0.0 && actor.pos.y > target_y
}
