//! Monotonic elapsed-time measurement over the host tick counter.

/// Tick rate of the reference handheld hardware's free-running counter.
pub const DEFAULT_TICKS_PER_SECOND: f64 = 268_123_480.0;

/// Converts raw hardware ticks into elapsed seconds since first query.
///
/// The epoch tick is captured lazily on the first call and never again, so
/// this measures time since first use rather than wall-clock time. Results
/// are non-negative and monotonic non-decreasing for the process lifetime;
/// counter wraparound is out of scope. There is no reset.
pub struct MonotonicClock {
    epoch: Option<u64>,
    ticks_per_second: f64,
}

impl MonotonicClock {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            epoch: None,
            ticks_per_second,
        }
    }

    /// Seconds elapsed between the epoch tick and `now_ticks`.
    ///
    /// The first call captures `now_ticks` as the epoch and returns 0.
    pub fn elapsed_seconds(&mut self, now_ticks: u64) -> f64 {
        let epoch = *self.epoch.get_or_insert(now_ticks);
        now_ticks.saturating_sub(epoch) as f64 / self.ticks_per_second
    }

    /// The captured epoch tick, if any query has happened yet.
    pub fn epoch_ticks(&self) -> Option<u64> {
        self.epoch
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICKS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_query_captures_epoch_and_returns_zero() {
        let mut clock = MonotonicClock::new(1000.0);
        assert_eq!(clock.epoch_ticks(), None);
        assert_eq!(clock.elapsed_seconds(5000), 0.0);
        assert_eq!(clock.epoch_ticks(), Some(5000));
    }

    #[test]
    fn epoch_is_captured_only_once() {
        let mut clock = MonotonicClock::new(1000.0);
        clock.elapsed_seconds(1000);
        clock.elapsed_seconds(9000);
        assert_eq!(clock.epoch_ticks(), Some(1000));
    }

    #[test]
    fn elapsed_is_derived_from_epoch() {
        let mut clock = MonotonicClock::new(1000.0);
        clock.elapsed_seconds(2000);
        assert_eq!(clock.elapsed_seconds(2500), 0.5);
        assert_eq!(clock.elapsed_seconds(4000), 2.0);
    }

    #[test]
    fn repeated_queries_are_non_decreasing() {
        let mut clock = MonotonicClock::new(1000.0);
        let a = clock.elapsed_seconds(100);
        let b = clock.elapsed_seconds(100);
        let c = clock.elapsed_seconds(101);
        assert!(a <= b);
        assert!(b <= c);
        assert!(a >= 0.0);
    }
}
