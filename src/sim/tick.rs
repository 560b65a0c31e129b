//! Fixed timestep simulation tick
//!
//! One call advances the game by a single 60 Hz step: inputs, difficulty,
//! animation clock, physics, spawning, movement, collision, scoring. The
//! shell owns frame pacing and the 1200 ms spawn timer; both reach the
//! simulation only as discrete per-tick events.

use super::collision;
use super::difficulty::Difficulty;
use super::state::{GamePhase, GameState};

/// Discrete events for a single tick, dequeued by the shell in arrival order
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Impulse events this tick (taps/clicks). While Playing each one
    /// overwrites the actor's velocity; in GameOver the first restarts the
    /// round and the rest are ignored.
    pub impulses: u32,
    /// Spawn-timer event fired; actionable only while Playing
    pub spawn: bool,
}

impl TickInput {
    /// A single impulse, no spawn event
    pub fn impulse() -> Self {
        Self {
            impulses: 1,
            spawn: false,
        }
    }
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::GameOver => {
            // Only a reset impulse is heard here
            if input.impulses > 0 {
                log::debug!("restart requested, high score {}", state.high_score);
                state.reset();
            }
        }
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    let previous_level = state.difficulty.level;
    state.difficulty = Difficulty::for_score(state.score(), &state.metrics);
    if state.difficulty.level > previous_level {
        log::info!(
            "level {} reached at score {}",
            state.difficulty.level,
            state.score()
        );
    }

    state.animation_clock += 1;

    state.actor.apply_gravity(state.metrics.gravity);
    for _ in 0..input.impulses {
        state.actor.apply_impulse(state.metrics.impulse);
    }
    state.actor.integrate();

    if input.spawn {
        state.spawn_pair();
    }
    state.advance_obstacles();

    if let Some(hit) = collision::check(
        &state.actor,
        &state.obstacles,
        state.metrics.top_grace,
        state.metrics.height,
    ) {
        state.phase = GamePhase::GameOver;
        state.high_score = state.high_score.max(state.score());
        log::info!(
            "round over ({hit:?}): score {}, level {}, high score {}",
            state.score(),
            state.difficulty.level,
            state.high_score
        );
        return;
    }

    score_crossings(state);
}

/// Award each pair exactly once, when its center transitions past the
/// actor's x. A threshold test with a per-pair flag, not float equality:
/// at higher speeds the center skips several pixels per tick and would
/// never land on an exact coordinate.
fn score_crossings(state: &mut GameState) {
    let actor_x = state.actor.pos.x;
    let mut crossed = 0;
    for pair in &mut state.obstacles {
        if !pair.scored && pair.center_x() <= actor_x {
            pair.scored = true;
            crossed += 1;
        }
    }
    for _ in 0..crossed {
        state.award_pair();
    }
    if crossed > 0 {
        log::debug!("score {}", state.score());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Viewport};
    use crate::sim::state::ObstaclePair;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(Config::new(Viewport::new(400, 600).unwrap(), 42))
    }

    /// A pair whose gate the actor cannot touch from its spawn height
    fn harmless_pair(x: f32) -> ObstaclePair {
        ObstaclePair::new(x, 500.0, 400.0, Vec2::new(50.0, 400.0))
    }

    #[test]
    fn test_free_fall_scenario() {
        // Viewport 400x600, scale 1: no impulses for 40 ticks
        let mut state = state();
        let mut last_y = state.actor.pos.y;
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
            assert!(state.actor.pos.y > last_y, "fall must be monotone");
            last_y = state.actor.pos.y;
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor.velocity_y, 40.0 * 0.25);
        assert_eq!(state.animation_clock, 40);
    }

    #[test]
    fn test_impulse_sets_velocity_immediately() {
        let mut state = state();
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        tick(&mut state, &TickInput::impulse());
        assert_eq!(state.actor.velocity_y, -7.0);
        // Next tick adds gravity back on top
        tick(&mut state, &TickInput::default());
        assert_eq!(state.actor.velocity_y, -6.75);
    }

    #[test]
    fn test_queued_impulses_are_equivalent_to_one() {
        let mut one = state();
        let mut many = state();
        tick(&mut one, &TickInput::impulse());
        tick(
            &mut many,
            &TickInput {
                impulses: 5,
                spawn: false,
            },
        );
        assert_eq!(one.actor.velocity_y, many.actor.velocity_y);
        assert_eq!(one.actor.pos.y, many.actor.pos.y);
    }

    #[test]
    fn test_spawn_event_only_while_playing() {
        let mut state = state();
        tick(
            &mut state,
            &TickInput {
                impulses: 0,
                spawn: true,
            },
        );
        assert_eq!(state.obstacles.len(), 1);

        state.phase = GamePhase::GameOver;
        tick(
            &mut state,
            &TickInput {
                impulses: 0,
                spawn: true,
            },
        );
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_spawned_pair_advances_same_tick() {
        let mut state = state();
        tick(
            &mut state,
            &TickInput {
                impulses: 0,
                spawn: true,
            },
        );
        let expected = state.metrics.spawn_x - state.difficulty.speed;
        assert_eq!(state.obstacles[0].center_x(), expected);
    }

    #[test]
    fn test_pair_scores_exactly_once() {
        let mut state = state();
        let actor_x = state.actor.pos.x;
        state.obstacles.push(harmless_pair(actor_x + 30.0));

        // Hold altitude with regular impulses so the floor never interferes
        for i in 0..60 {
            let input = if i % 20 == 0 {
                TickInput::impulse()
            } else {
                TickInput::default()
            };
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 1);
        assert!(state.obstacles[0].scored);
    }

    #[test]
    fn test_crossing_detected_when_center_skips_past() {
        // Center starts 2 px right of the actor; at speed 5 it lands 3 px
        // past on the next tick, never touching the exact coordinate
        let mut state = state();
        let actor_x = state.actor.pos.x;
        state.obstacles.push(harmless_pair(actor_x + 2.0));
        tick(&mut state, &TickInput::impulse());
        assert!(state.obstacles[0].center_x() < actor_x);
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_floor_ends_the_round() {
        let mut state = state();
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::default());
            ticks += 1;
            assert!(ticks < 600, "free fall must hit the floor");
        }
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ceiling_grace_then_game_over() {
        let mut state = state();
        // Hammer impulses every tick; the actor climbs past the grace band
        let mut ticks = 0;
        while state.phase == GamePhase::Playing {
            tick(&mut state, &TickInput::impulse());
            ticks += 1;
            assert!(ticks < 600, "climb must leave the grace band");
        }
        // Only ends once the top edge is above -100
        assert!(state.actor.bounds().top() < -state.metrics.top_grace);
    }

    #[test]
    fn test_obstacle_hit_ends_round_and_folds_high_score() {
        let mut state = state();
        // A wall right on the actor: gate at the very bottom, no reachable gap
        state
            .obstacles
            .push(ObstaclePair::new(state.actor.pos.x, 600.0, 100.0, Vec2::new(50.0, 400.0)));
        for _ in 0..3 {
            state.award_pair();
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_no_scoring_on_the_death_tick() {
        let mut state = state();
        let actor_x = state.actor.pos.x;
        // This pair both collides and crosses this tick; death wins
        state
            .obstacles
            .push(ObstaclePair::new(actor_x + 2.0, 600.0, 100.0, Vec2::new(50.0, 400.0)));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_game_over_waits_for_reset_impulse() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        let before = state.actor.pos.y;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.actor.pos.y, before);

        tick(&mut state, &TickInput::impulse());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor.pos, state.metrics.actor_spawn);
    }

    #[test]
    fn test_high_score_survives_rounds() {
        let mut state = state();
        for _ in 0..5 {
            state.award_pair();
        }
        state.actor.pos.y = 1000.0; // force the floor
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 5);

        // Round two ends scoreless; the high score does not regress
        tick(&mut state, &TickInput::impulse());
        state.actor.pos.y = 1000.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn test_level_up_affects_only_later_spawns() {
        let mut state = state();
        tick(
            &mut state,
            &TickInput {
                impulses: 1,
                spawn: true,
            },
        );
        let early_gap = state.obstacles[0].gap();
        assert_eq!(early_gap, 200.0);

        for _ in 0..20 {
            state.award_pair();
        }
        tick(
            &mut state,
            &TickInput {
                impulses: 1,
                spawn: true,
            },
        );
        assert_eq!(state.difficulty.level, 2);
        assert_eq!(state.difficulty.speed, 6.0);
        // The old pair keeps its frozen gap; the new one gets the tighter gap
        assert_eq!(state.obstacles[0].gap(), 200.0);
        assert_eq!(state.obstacles[1].gap(), 190.0);
    }

    #[test]
    fn test_animation_clock_freezes_on_game_over() {
        let mut state = state();
        tick(&mut state, &TickInput::default());
        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.animation_clock, 1);
    }
}
