// SPDX-License-Identifier: MPL-2.0
//! Time-based tween for smooth strip scrolling.

use std::time::{Duration, Instant};

/// Quadratic ease-out: fast start, gentle landing.
///
/// Maps linear progress `t` in `[0, 1]` onto the curve.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Animates a scalar offset from its current value to a target.
///
/// Starting a new animation replaces the running one, continuing from
/// whatever offset the caller reports as current.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    active: bool,
    from: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            active: false,
            from: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(250),
        }
    }
}

impl ScrollAnimator {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begins animating from `from` to `target` at `now`.
    ///
    /// Returns `false` when no animation is needed (zero duration or already
    /// at the target); the caller should jump straight to `target`.
    pub fn start(&mut self, from: f32, target: f32, now: Instant) -> bool {
        if self.duration.is_zero() || (target - from).abs() < f32::EPSILON {
            self.active = false;
            return false;
        }
        self.active = true;
        self.from = from;
        self.target = target;
        self.started_at = now;
        true
    }

    /// Returns the offset for `now`, or `None` when idle.
    ///
    /// The final tick returns exactly the target and deactivates.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(self.target);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        Some(self.from + (self.target - self.from) * ease_out(t))
    }

    /// Stops the current animation where it is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_endpoints_are_fixed() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(ease_out(-0.5), 0.0);
        assert_eq!(ease_out(1.5), 1.0);
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert_eq!(ease_out(0.5), 0.75);
        assert!(ease_out(0.25) > 0.25);
    }

    #[test]
    fn tick_reaches_target_and_stops() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::from_millis(200));
        assert!(animator.start(0.0, 200.0, start));

        let mid = animator
            .tick(start + Duration::from_millis(100))
            .expect("animating");
        assert!(mid > 100.0 && mid < 200.0, "ease-out midpoint was {mid}");

        assert_eq!(animator.tick(start + Duration::from_millis(250)), Some(200.0));
        assert!(!animator.is_active());
        assert!(animator.tick(start + Duration::from_millis(300)).is_none());
    }

    #[test]
    fn zero_duration_skips_animation() {
        let mut animator = ScrollAnimator::new(Duration::ZERO);
        assert!(!animator.start(0.0, 120.0, Instant::now()));
        assert!(!animator.is_active());
    }

    #[test]
    fn restart_supersedes_running_animation() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::from_millis(100));
        animator.start(0.0, 200.0, start);
        animator.start(50.0, 400.0, start + Duration::from_millis(10));

        assert_eq!(animator.target(), Some(400.0));
        assert_eq!(
            animator.tick(start + Duration::from_millis(500)),
            Some(400.0)
        );
    }

    #[test]
    fn cancel_deactivates() {
        let mut animator = ScrollAnimator::new(Duration::from_millis(100));
        animator.start(0.0, 10.0, Instant::now());
        animator.cancel();
        assert!(animator.target().is_none());
    }
}
