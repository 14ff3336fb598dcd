//! Eased count-up animation.
//!
//! A [`CountAnimation`] maps elapsed time to the integer shown by an animated
//! counter. It holds no clock of its own; drivers sample it at
//! [`FRAME_INTERVAL`] with whatever monotonic clock they own.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sampling interval for counter drivers (~60Hz).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cubic ease-out: fast start, decelerating into 1.0.
///
/// ```rust
/// use dashboard_core::counter::ease_out_cubic;
///
/// assert_eq!(ease_out_cubic(0.0), 0.0);
/// assert_eq!(ease_out_cubic(1.0), 1.0);
/// assert!(ease_out_cubic(0.5) > 0.5);
/// ```
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Snapshot of a counter as observed by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub count: u64,
    /// Set once the start delay has elapsed
    pub is_loaded: bool,
}

/// A count from 0 to `target` over `duration`, starting after `delay`.
///
/// A new triple is a new animation; there is no retargeting mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountAnimation {
    pub target: u64,
    pub duration: Duration,
    pub delay: Duration,
}

impl CountAnimation {
    pub const fn new(target: u64, duration: Duration, delay: Duration) -> Self {
        Self {
            target,
            duration,
            delay,
        }
    }

    /// Convenience constructor taking milliseconds.
    pub const fn from_millis(target: u64, duration_ms: u64, delay_ms: u64) -> Self {
        Self::new(
            target,
            Duration::from_millis(duration_ms),
            Duration::from_millis(delay_ms),
        )
    }

    /// Total time until the counter settles on `target`.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Linear progress in `[0, 1]` at `elapsed` since mount.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value at `elapsed` since mount.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        let value = (self.target as f64 * ease_out_cubic(progress)).floor() as u64;
        value.min(self.target)
    }

    pub fn is_loaded(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Full snapshot at `elapsed` since mount.
    pub fn state_at(&self, elapsed: Duration) -> CounterState {
        CounterState {
            count: self.value_at(elapsed),
            is_loaded: self.is_loaded(elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_ease_out_cubic_midpoint() {
        // 1 - 0.5^3
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_zero_before_delay() {
        let anim = CountAnimation::from_millis(1000, 500, 200);
        for t in [0, 50, 199] {
            assert_eq!(anim.value_at(ms(t)), 0);
            assert!(!anim.is_loaded(ms(t)));
        }
        assert!(anim.is_loaded(ms(200)));
    }

    #[test]
    fn test_total_assets_scenario() {
        let anim = CountAnimation::from_millis(57985, 2500, 300);
        assert_eq!(anim.value_at(ms(300)), 0);
        assert_eq!(anim.value_at(ms(2800)), 57985);
        assert_eq!(anim.value_at(ms(10_000)), 57985);
        assert!(anim.is_complete(ms(2800)));
        assert!(!anim.is_complete(ms(2799)));
    }

    #[test]
    fn test_non_decreasing_over_run() {
        let anim = CountAnimation::from_millis(28374, 2500, 600);
        let mut previous = 0;
        let mut t = 600;
        while t <= 3100 {
            let value = anim.value_at(ms(t));
            assert!(value >= previous, "value dropped at {t}ms");
            assert!(value <= anim.target);
            previous = value;
            t += 16;
        }
        assert_eq!(anim.value_at(ms(3100)), 28374);
    }

    #[test]
    fn test_progress_halfway_is_eased() {
        let anim = CountAnimation::from_millis(1000, 1000, 0);
        assert_relative_eq!(anim.progress(ms(500)), 0.5);
        assert_eq!(anim.value_at(ms(500)), 875);
    }

    #[test]
    fn test_zero_duration_completes_after_delay() {
        let anim = CountAnimation::from_millis(42, 0, 100);
        assert_eq!(anim.value_at(ms(99)), 0);
        assert_eq!(anim.value_at(ms(100)), 42);
    }

    #[test]
    fn test_state_at() {
        let anim = CountAnimation::from_millis(10, 100, 50);
        assert_eq!(anim.state_at(ms(0)), CounterState::default());
        assert_eq!(
            anim.state_at(ms(150)),
            CounterState {
                count: 10,
                is_loaded: true
            }
        );
    }
}
