/// Abstraction over the host's free-running tick counter.
/// Implementations: StdTickSource (production), MockTickSource (testing).
pub trait TickSource {
    /// Current raw tick count. Free-running, arbitrary origin.
    fn raw_ticks(&self) -> u64;

    /// Fixed hardware conversion rate from ticks to seconds.
    fn ticks_per_second(&self) -> f64;
}

/// Tick source backed by std::time::Instant, counting nanoseconds.
pub struct StdTickSource {
    start: std::time::Instant,
}

impl StdTickSource {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Default for StdTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for StdTickSource {
    fn raw_ticks(&self) -> u64 {
        self.start.elapsed().as_nanos() as u64
    }

    fn ticks_per_second(&self) -> f64 {
        1_000_000_000.0
    }
}

/// Mock tick source for deterministic testing.
pub struct MockTickSource {
    ticks: std::cell::Cell<u64>,
    ticks_per_second: f64,
}

impl MockTickSource {
    /// Create a mock counting at 1000 ticks per second (one tick per millisecond).
    pub fn new() -> Self {
        Self {
            ticks: std::cell::Cell::new(0),
            ticks_per_second: 1000.0,
        }
    }

    pub fn set_ticks(&self, ticks: u64) {
        self.ticks.set(ticks);
    }

    pub fn advance(&self, delta_ticks: u64) {
        self.ticks.set(self.ticks.get() + delta_ticks);
    }
}

impl Default for MockTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for MockTickSource {
    fn raw_ticks(&self) -> u64 {
        self.ticks.get()
    }

    fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }
}
