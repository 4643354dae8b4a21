//! Toggle Transition - Retargetable Timed Interpolation
//!
//! Owns the animation progress of a two-state control. The transition is
//! evaluated at an explicit time point each frame; nothing is scheduled and
//! no thread is owned, so the value can be sampled from whatever thread
//! paints. Only the target is set from caller code.

use serde::{Deserialize, Serialize};

/// Duration of a full inactive <-> active transition in seconds (340 ms).
pub const TOGGLE_DURATION_SECS: f64 = 0.34;

/// Rotation applied to the control glyph at full progress, in degrees.
pub const ACTIVE_ROTATION_DEGREES: f32 = 135.0;

/// Smoothstep ease: symmetric acceleration/deceleration, no overshoot.
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// A timed transition of a progress value in `[0, 1]` between the two
/// endpoints of a toggle.
///
/// Retargeting mid-flight is last-write-wins: the transition restarts from
/// the current interpolated position toward the new endpoint, so there is
/// never a discontinuous jump and transitions never queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToggleTransition {
    target_active: bool,
    start_progress: f32,
    started_at: f64,
    duration: f64,
}

impl ToggleTransition {
    /// Create a transition already settled at the endpoint matching
    /// `initial_active`.
    pub fn new(initial_active: bool) -> Self {
        Self {
            target_active: initial_active,
            start_progress: if initial_active { 1.0 } else { 0.0 },
            // Settled: any sample time is past the end of the transition.
            started_at: f64::NEG_INFINITY,
            duration: TOGGLE_DURATION_SECS,
        }
    }

    /// The last requested logical state.
    pub fn target_active(&self) -> bool {
        self.target_active
    }

    /// Request a transition toward `active`, starting at `now` (seconds).
    ///
    /// A retarget to the value already targeted is a no-op; an in-flight
    /// transition keeps running undisturbed.
    pub fn set_target(&mut self, active: bool, now: f64) {
        if active == self.target_active {
            return;
        }
        self.start_progress = self.progress(now);
        self.target_active = active;
        self.started_at = now;
        tracing::trace!(
            target_active = active,
            start_progress = self.start_progress,
            "toggle transition retargeted"
        );
    }

    /// Animation progress at `now`, always within `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        let endpoint = if self.target_active { 1.0 } else { 0.0 };
        if self.duration <= 0.0 {
            return endpoint;
        }
        let raw = (now - self.started_at) / self.duration;
        if raw >= 1.0 {
            // Settled: return the endpoint exactly, not a float-lerp of it.
            return endpoint;
        }
        let eased = ease_in_out(raw.max(0.0) as f32);
        let value = self.start_progress + (endpoint - self.start_progress) * eased;
        value.clamp(0.0, 1.0)
    }

    /// Glyph rotation derived from progress: `135 * progress` degrees.
    pub fn rotation_degrees(&self, now: f64) -> f32 {
        self.progress(now) * ACTIVE_ROTATION_DEGREES
    }

    /// Whether the transition is still in flight at `now`.
    pub fn is_animating(&self, now: f64) -> bool {
        now < self.started_at + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_settled_at_endpoint() {
        let off = ToggleTransition::new(false);
        assert_eq!(off.progress(0.0), 0.0);
        assert!(!off.is_animating(0.0));

        let on = ToggleTransition::new(true);
        assert_eq!(on.progress(0.0), 1.0);
        assert_eq!(on.rotation_degrees(0.0), ACTIVE_ROTATION_DEGREES);
    }

    #[test]
    fn transition_reaches_endpoint_after_duration() {
        let mut t = ToggleTransition::new(false);
        t.set_target(true, 10.0);
        assert!(t.is_animating(10.0));
        assert_eq!(t.progress(10.0), 0.0);
        assert_eq!(t.progress(10.0 + TOGGLE_DURATION_SECS), 1.0);
        assert!(!t.is_animating(10.0 + TOGGLE_DURATION_SECS));
    }

    #[test]
    fn midpoint_is_halfway_for_symmetric_ease() {
        let mut t = ToggleTransition::new(false);
        t.set_target(true, 0.0);
        let mid = t.progress(TOGGLE_DURATION_SECS / 2.0);
        assert!((mid - 0.5).abs() < 0.01);
    }

    #[test]
    fn same_target_retarget_does_not_restart() {
        let mut t = ToggleTransition::new(false);
        t.set_target(true, 0.0);

        let untouched = t;
        t.set_target(true, 0.1); // mid-flight, same value

        let probe = 0.25;
        assert_eq!(t.progress(probe), untouched.progress(probe));
    }

    #[test]
    fn retarget_restarts_from_current_position() {
        let mut t = ToggleTransition::new(false);
        t.set_target(true, 0.0);

        let at_flip = t.progress(0.17);
        t.set_target(false, 0.17);

        // No jump at the moment of the flip.
        assert!((t.progress(0.17) - at_flip).abs() < 1e-6);
        // And it heads back toward 0.
        assert!(t.progress(0.17 + TOGGLE_DURATION_SECS) < 1e-6);
    }

    proptest! {
        /// For any toggle sequence, progress stays in [0, 1] and rotation
        /// is always 135 * progress.
        #[test]
        fn progress_bounded_under_arbitrary_toggles(
            initial in any::<bool>(),
            steps in prop::collection::vec((any::<bool>(), 0.0f64..1.0), 1..40),
            probe_dt in 0.0f64..2.0,
        ) {
            let mut t = ToggleTransition::new(initial);
            let mut now = 0.0;
            for (active, dt) in steps {
                now += dt;
                t.set_target(active, now);
                let p = t.progress(now);
                prop_assert!((0.0..=1.0).contains(&p));
                prop_assert!((t.rotation_degrees(now) - p * ACTIVE_ROTATION_DEGREES).abs() < 1e-5);
            }
            let p = t.progress(now + probe_dt);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        /// Once the duration has elapsed with no further retarget, progress
        /// sits exactly on the endpoint of the last request.
        #[test]
        fn settles_on_last_requested_endpoint(
            flips in prop::collection::vec(any::<bool>(), 1..20),
        ) {
            let mut t = ToggleTransition::new(false);
            let mut now = 0.0;
            let mut last = false;
            for active in flips {
                now += 0.05;
                t.set_target(active, now);
                last = active;
            }
            let settled = t.progress(now + TOGGLE_DURATION_SECS);
            prop_assert_eq!(settled, if last { 1.0 } else { 0.0 });
        }
    }
}
