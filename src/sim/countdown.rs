//! Race countdown
//!
//! The remaining time is a vertical bar that shrinks from the top every half
//! second of wall-clock time. The race is over once the bar is gone.

use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Bounds;
use crate::consts::*;

/// Shrinking countdown bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Top-left corner of the bar
    pub pos: IVec2,
    pub width: i32,
    /// Remaining bar height
    pub remaining: i32,
    /// Clock reading of the last shrink (None until the first advance)
    pub last_sample: Option<Duration>,
}

impl Countdown {
    /// Full-height bar centered horizontally
    pub fn new(bounds: Bounds) -> Self {
        Self::with_extent(bounds, COUNTDOWN_EXTENT)
    }

    /// Bar with a custom starting height, keeping the bottom edge fixed
    pub fn with_extent(bounds: Bounds, extent: i32) -> Self {
        let extent = extent.max(0);
        Self {
            pos: IVec2::new(
                bounds.width / 2 - COUNTDOWN_WIDTH / 2,
                COUNTDOWN_TOP + COUNTDOWN_EXTENT - extent,
            ),
            width: COUNTDOWN_WIDTH,
            remaining: extent,
            last_sample: None,
        }
    }

    /// Interval between shrinks
    pub fn interval() -> Duration {
        Duration::from_millis(COUNTDOWN_INTERVAL_MS)
    }

    /// Sample the clock and shrink the bar if a full interval has passed
    ///
    /// Returns true if the bar shrank.
    pub fn advance(&mut self, now: Duration) -> bool {
        let Some(last) = self.last_sample else {
            self.last_sample = Some(now);
            return false;
        };

        if now.saturating_sub(last) < Self::interval() || self.is_expired() {
            return false;
        }

        let step = COUNTDOWN_STEP.min(self.remaining);
        self.remaining -= step;
        self.pos.y += step;
        self.last_sample = Some(now);
        true
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0
    }

    /// Bar has entered the final stretch (drawn red)
    #[inline]
    pub fn is_warning(&self) -> bool {
        self.pos.y >= COUNTDOWN_WARNING_Y
    }

    /// Drawn footprint as (x, y, w, h)
    pub fn rect(&self) -> (i32, i32, i32, i32) {
        (self.pos.x, self.pos.y, self.width, self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_advance_sets_baseline() {
        let mut countdown = Countdown::new(Bounds::default());
        assert!(!countdown.advance(ms(10_000)));
        assert_eq!(countdown.remaining, COUNTDOWN_EXTENT);
        assert_eq!(countdown.last_sample, Some(ms(10_000)));
    }

    #[test]
    fn test_shrinks_only_after_interval() {
        let mut countdown = Countdown::new(Bounds::default());
        countdown.advance(ms(0));

        assert!(!countdown.advance(ms(499)));
        assert_eq!(countdown.remaining, 500);

        assert!(countdown.advance(ms(500)));
        assert_eq!(countdown.remaining, 496);
        assert_eq!(countdown.pos.y, 104);

        // Interval is measured from the last shrink
        assert!(!countdown.advance(ms(999)));
        assert!(countdown.advance(ms(1000)));
        assert_eq!(countdown.remaining, 492);
    }

    #[test]
    fn test_late_sample_shrinks_once() {
        let mut countdown = Countdown::new(Bounds::default());
        countdown.advance(ms(0));
        assert!(countdown.advance(ms(3_000)));
        assert_eq!(countdown.remaining, 496);
    }

    #[test]
    fn test_expires_after_full_run() {
        let mut countdown = Countdown::new(Bounds::default());
        countdown.advance(ms(0));

        for i in 1..125u64 {
            countdown.advance(ms(i * 500));
            assert!(!countdown.is_expired(), "expired early at interval {}", i);
        }
        assert_eq!(countdown.remaining, 4);

        countdown.advance(ms(62_500));
        assert_eq!(countdown.remaining, 0);
        assert!(countdown.is_expired());

        // Floor at zero
        countdown.advance(ms(63_000));
        assert_eq!(countdown.remaining, 0);
    }

    #[test]
    fn test_frame_rate_sampling() {
        // 60 Hz sampling: each shrink lands on the first frame past the interval
        let mut countdown = Countdown::new(Bounds::default());
        let frame = Duration::from_micros(16_667);
        let mut now = Duration::ZERO;
        let mut shrinks = 0;
        while now < Duration::from_secs(2) {
            if countdown.advance(now) {
                shrinks += 1;
            }
            now += frame;
        }
        assert_eq!(shrinks, 3);
    }

    #[test]
    fn test_warning_zone() {
        let mut countdown = Countdown::new(Bounds::default());
        assert!(!countdown.is_warning());

        countdown.advance(ms(0));
        let mut t = 0;
        while countdown.pos.y < COUNTDOWN_WARNING_Y {
            t += 500;
            countdown.advance(ms(t));
        }
        assert!(countdown.is_warning());
        assert_eq!(countdown.pos.y, 552);
    }

    #[test]
    fn test_custom_extent() {
        let countdown = Countdown::with_extent(Bounds::default(), 4);
        assert_eq!(countdown.pos, IVec2::new(395, 596));
        assert_eq!(countdown.rect(), (395, 596, 10, 4));
    }
}
