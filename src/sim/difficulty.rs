//! Score-driven difficulty curve
//!
//! Speed and gap are pure functions of cumulative score, recomputed once per
//! Playing tick before physics. Pairs freeze their gap at spawn, so a
//! level-up only affects pairs spawned afterward.

use super::metrics::Metrics;
use crate::consts::{BASE_GAP, BASE_SPEED, GAP_PER_LEVEL, SCORE_PER_LEVEL, SPEED_PER_LEVEL};

/// Current difficulty rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// 1-based level, one step per `SCORE_PER_LEVEL` points
    pub level: u32,
    /// Horizontal obstacle speed per tick
    pub speed: f32,
    /// Vertical gap for newly spawned pairs
    pub gap: f32,
}

impl Difficulty {
    /// Rates for a given score. Speed is non-decreasing in score, gap is
    /// non-increasing and floored at `metrics.min_gap`.
    pub fn for_score(score: u32, metrics: &Metrics) -> Self {
        let level = score / SCORE_PER_LEVEL + 1;
        let step = (level - 1) as f32;
        Self {
            level,
            speed: (BASE_SPEED + step * SPEED_PER_LEVEL) * metrics.scale,
            gap: ((BASE_GAP - step * GAP_PER_LEVEL) * metrics.scale).max(metrics.min_gap),
        }
    }

    /// Level-1 rates, restored on reset
    pub fn base(metrics: &Metrics) -> Self {
        Self::for_score(0, metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Viewport;
    use proptest::prelude::*;

    fn metrics() -> Metrics {
        Metrics::new(Viewport::new(400, 600).unwrap())
    }

    #[test]
    fn test_level_steps_every_twenty_points() {
        let m = metrics();
        assert_eq!(Difficulty::for_score(0, &m).level, 1);
        assert_eq!(Difficulty::for_score(19, &m).level, 1);
        assert_eq!(Difficulty::for_score(20, &m).level, 2);
        assert_eq!(Difficulty::for_score(40, &m).level, 3);
    }

    #[test]
    fn test_level_two_rates_at_unit_scale() {
        let d = Difficulty::for_score(20, &metrics());
        assert_eq!(d.level, 2);
        assert_eq!(d.speed, 6.0);
        assert_eq!(d.gap, 190.0);
    }

    #[test]
    fn test_gap_floors_at_min() {
        let m = metrics();
        // Level 7 reaches the floor exactly (200 - 60 = 140)
        assert_eq!(Difficulty::for_score(120, &m).gap, 140.0);
        // Deeper levels stay clamped
        assert_eq!(Difficulty::for_score(500, &m).gap, 140.0);
        assert_eq!(Difficulty::for_score(10_000, &m).gap, 140.0);
    }

    #[test]
    fn test_base_matches_score_zero() {
        let m = metrics();
        assert_eq!(Difficulty::base(&m), Difficulty::for_score(0, &m));
        assert_eq!(Difficulty::base(&m).speed, 5.0);
        assert_eq!(Difficulty::base(&m).gap, 200.0);
    }

    proptest! {
        #[test]
        fn prop_speed_monotone_gap_antitone(s1 in 0u32..5_000, s2 in 0u32..5_000) {
            let m = metrics();
            let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
            let d_lo = Difficulty::for_score(lo, &m);
            let d_hi = Difficulty::for_score(hi, &m);
            prop_assert!(d_lo.speed <= d_hi.speed);
            prop_assert!(d_lo.gap >= d_hi.gap);
        }

        #[test]
        fn prop_gap_never_below_floor(score in 0u32..1_000_000) {
            let m = metrics();
            prop_assert!(Difficulty::for_score(score, &m).gap >= m.min_gap);
        }
    }
}
