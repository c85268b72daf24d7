use tracing::error;

use crate::traits::{
    FatalDisplay, HostLifecycle, RawButtons, RawInputSource, RawInputState, StdTickSource,
    TickSource, TouchChannel,
};

/// Host substrate for running the demo binary on a desktop OS.
///
/// Ticks come from `std::time::Instant` in nanoseconds. There is no input
/// hardware behind it, so scans report no transitions, and a shown fatal is
/// acknowledged on the next scan rather than waiting for a button that does
/// not exist. The lifecycle probe allows a fixed frame budget.
pub struct DesktopHost {
    ticks: StdTickSource,
    frame_budget: u64,
    frames: u64,
    fatal_shown: bool,
}

impl DesktopHost {
    pub fn new(frame_budget: u64) -> Self {
        Self {
            ticks: StdTickSource::new(),
            frame_budget,
            frames: 0,
            fatal_shown: false,
        }
    }
}

impl TickSource for DesktopHost {
    fn raw_ticks(&self) -> u64 {
        self.ticks.raw_ticks()
    }

    fn ticks_per_second(&self) -> f64 {
        self.ticks.ticks_per_second()
    }
}

impl RawInputSource for DesktopHost {
    fn scan(&mut self) -> RawInputState {
        if self.fatal_shown {
            // No physical confirm button on this host; acknowledge so the
            // reporter's wait loop can finish.
            self.fatal_shown = false;
            return RawInputState {
                pressed: RawButtons::START,
                released: RawButtons::default(),
            };
        }
        RawInputState::default()
    }
}

impl TouchChannel for DesktopHost {
    fn poll(&mut self) {}
}

impl HostLifecycle for DesktopHost {
    fn keep_running(&mut self) -> bool {
        if self.frames >= self.frame_budget {
            return false;
        }
        self.frames += 1;
        true
    }
}

impl FatalDisplay for DesktopHost {
    fn show_fatal(&mut self, message: &str) {
        eprintln!("{message}");
        error!("{message}");
        self.fatal_shown = true;
    }
}
