//! Damped stepping toward a scroll target.
//!
//! Each step travels a fixed fraction (`1 / damping`) of the remaining distance,
//! which gives a fast start and a gentle stop. Once a step would move the
//! viewport by no more than `threshold` pixels, the animation snaps exactly onto
//! the target and ends.
//!
//! [`Motion::next_action`] is pure: it never touches the host, so the whole
//! animation curve can be checked without a viewport or timers.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fraction divisor applied to the remaining distance on every step.
pub const DEFAULT_DAMPING: f64 = 8.0;

/// Step size in pixels at or below which the animation snaps and stops.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Delay between two steps in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 30;

/// What the host should do after one step of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NextAction {
    /// Scroll to the offset and schedule another step.
    Continue(f64),
    /// Scroll to the offset (the target itself) and stop.
    Done(f64),
}

impl NextAction {
    /// The offset the viewport should be moved to.
    pub fn offset(self) -> f64 {
        match self {
            NextAction::Continue(offset) | NextAction::Done(offset) => offset,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, NextAction::Done(_))
    }
}

/// Tuning of the scroll animation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Motion {
    pub damping: f64,
    pub threshold: f64,
    pub interval_ms: u64,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl Motion {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Compute the next scroll action for a viewport at `current` heading to `target`.
    ///
    /// Offsets are in pixels. The returned [`NextAction::Done`] always carries
    /// `target` unchanged, so the final position is exact regardless of the
    /// floating point drift of the preceding steps. A step that rounds back to
    /// `current` also snaps, since repeating it would never get closer.
    pub fn next_action(&self, current: f64, target: f64) -> NextAction {
        let delta = (target - current) / self.damping;
        let next = current + delta;
        if delta.abs() > self.threshold && next != current {
            NextAction::Continue(next)
        } else {
            NextAction::Done(target)
        }
    }

    /// Reject tunings that would never converge.
    ///
    /// A damping below 1 overshoots the target on every step and a threshold of
    /// zero would keep stepping through sub-pixel distances.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.damping.is_finite() || self.damping < 1.0 {
            return Err(Error::InvalidMotion {
                reason: format!("damping must be a finite number >= 1, got {}", self.damping),
            });
        }
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(Error::InvalidMotion {
                reason: format!(
                    "threshold must be a finite number > 0, got {}",
                    self.threshold
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the step function to completion and return every offset written.
    fn trajectory(motion: &Motion, start: f64, target: f64) -> Vec<f64> {
        let mut offsets = Vec::new();
        let mut current = start;
        loop {
            let action = motion.next_action(current, target);
            current = action.offset();
            offsets.push(current);
            if action.is_done() {
                return offsets;
            }
            assert!(offsets.len() < 1_000, "animation did not converge");
        }
    }

    #[test]
    fn first_steps_travel_an_eighth_of_the_distance() {
        let motion = Motion::default();
        assert_eq!(motion.next_action(0.0, 800.0), NextAction::Continue(100.0));
        assert_eq!(motion.next_action(100.0, 800.0), NextAction::Continue(187.5));
    }

    #[test]
    fn ends_exactly_on_target() {
        let offsets = trajectory(&Motion::default(), 0.0, 800.0);
        assert_eq!(offsets.last().copied(), Some(800.0));
        assert_eq!(offsets[0], 100.0);
        assert_eq!(offsets[1], 187.5);
    }

    #[test]
    fn small_distance_snaps_immediately() {
        // delta = 5 / 8 = 0.625, within the threshold
        assert_eq!(Motion::default().next_action(0.0, 5.0), NextAction::Done(5.0));
    }

    #[test]
    fn already_at_target_is_done() {
        assert_eq!(
            Motion::default().next_action(420.0, 420.0),
            NextAction::Done(420.0)
        );
    }

    #[test]
    fn threshold_boundary_snaps() {
        // delta is exactly 1.0, which is not greater than the threshold
        assert_eq!(Motion::default().next_action(0.0, 8.0), NextAction::Done(8.0));
        assert_eq!(
            Motion::default().next_action(0.0, 9.0),
            NextAction::Continue(1.125)
        );
    }

    #[test]
    fn scrolls_upward() {
        let offsets = trajectory(&Motion::default(), 1600.0, 0.0);
        assert_eq!(offsets[0], 1400.0);
        assert_eq!(offsets.last().copied(), Some(0.0));
    }

    #[test]
    fn trajectory_is_monotonic_and_never_overshoots() {
        let motion = Motion::default();
        let cases = [
            (0.0, 800.0),
            (800.0, 0.0),
            (-250.0, 12_000.0),
            (3.5, 3.25),
            (10_000.0, 9_990.0),
            (0.0, 1e9),
        ];
        for (start, target) in cases {
            let mut previous = start;
            for offset in trajectory(&motion, start, target) {
                if target >= start {
                    assert!(offset >= previous && offset <= target, "{start} -> {target}");
                } else {
                    assert!(offset <= previous && offset >= target, "{start} -> {target}");
                }
                previous = offset;
            }
        }
    }

    #[test]
    fn step_count_is_logarithmic_in_distance() {
        let motion = Motion::default();
        for distance in [10.0_f64, 100.0, 1_000.0, 50_000.0, 1e9] {
            let steps = trajectory(&motion, 0.0, distance).len();
            // While stepping, the remaining distance shrinks by 7/8 and stepping
            // stops once it falls to 8 px or less.
            let bound = ((distance / 8.0).ln() / (8.0_f64 / 7.0).ln()).ceil() as usize + 2;
            assert!(steps <= bound, "{distance}: {steps} steps > {bound}");
        }
    }

    #[test]
    fn step_lost_to_rounding_snaps() {
        let (current, target) = (1e17, 1e17 + 48.0);
        assert_eq!(
            Motion::default().next_action(current, target),
            NextAction::Done(target)
        );
        assert_eq!(trajectory(&Motion::default(), -1e17, -1e17 - 48.0).len(), 1);
    }

    #[test]
    fn damping_of_one_lands_in_a_single_move() {
        let motion = Motion {
            damping: 1.0,
            ..Motion::default()
        };
        assert_eq!(trajectory(&motion, 0.0, 500.0), vec![500.0, 500.0]);
    }

    #[test]
    fn validate_rejects_non_converging_motion() {
        assert!(Motion::default().validate().is_ok());

        for damping in [0.5, 0.0, -8.0, f64::NAN, f64::INFINITY] {
            let motion = Motion {
                damping,
                ..Motion::default()
            };
            assert!(
                matches!(motion.validate(), Err(Error::InvalidMotion { .. })),
                "damping {damping}"
            );
        }
        for threshold in [0.0, -1.0, f64::NAN] {
            let motion = Motion {
                threshold,
                ..Motion::default()
            };
            assert!(
                matches!(motion.validate(), Err(Error::InvalidMotion { .. })),
                "threshold {threshold}"
            );
        }
    }

    #[test]
    fn interval_defaults_to_thirty_millis() {
        assert_eq!(Motion::default().interval(), Duration::from_millis(30));
    }
}
