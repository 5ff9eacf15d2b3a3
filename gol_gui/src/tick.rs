use std::time::{Duration, Instant};

/// Caps how often the simulation advances, independent of how often the ui is repainted.
///
/// Ticks that were missed (e.g. whilst the window was not being redrawn) are skipped rather than caught up on.
#[derive(Debug)]
pub(crate) struct TickTimer {
    /// The time between ticks.
    period: Duration,
    /// The earliest time the next tick can happen.
    next_tick: Instant,
}

impl TickTimer {
    /// Creates a timer whose first tick is due straight away.
    pub(crate) fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_tick: now,
        }
    }

    /// Returns true if a tick is due, scheduling the following tick if so.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        self.next_tick += self.period;
        if self.next_tick <= now {
            self.next_tick = now + self.period;
        }

        true
    }

    /// The time left until the next tick is due.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    /// Only one tick happens per period.
    fn one_tick_per_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);

        assert!(timer.poll(start));
        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + PERIOD));
        assert!(!timer.poll(start + Duration::from_millis(150)));
    }

    #[test]
    /// Ticks are scheduled from when they were due, not when they were polled.
    fn does_not_drift() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);

        assert!(timer.poll(start + Duration::from_millis(30)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(30)),
            Duration::from_millis(70)
        );
    }

    #[test]
    /// A long pause does not cause a burst of ticks.
    fn missed_ticks_are_skipped() {
        let start = Instant::now();
        let mut timer = TickTimer::new(PERIOD, start);
        assert!(timer.poll(start));

        let late = start + Duration::from_secs(5);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.remaining(late), PERIOD);
    }
}
