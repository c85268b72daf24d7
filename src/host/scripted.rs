use crate::traits::{
    FatalDisplay, HostLifecycle, MockTickSource, RawInputSource, RawInputState, ScriptedInput,
    TickSource, TouchChannel,
};

/// Deterministic host substrate for tests.
///
/// Ticks count at 1000 per second and advance by a configurable step on each
/// read (zero by default, freezing the clock). Input plays back from the
/// embedded [`ScriptedInput`]; the lifecycle probe allows a fixed number of
/// iterations.
pub struct ScriptedHost {
    /// Scripted raw input, exposed so tests can queue edges directly.
    pub input: ScriptedInput,
    /// Messages shown through the fatal display.
    pub fatal_messages: Vec<String>,
    ticks: MockTickSource,
    tick_step: u64,
    frames_allowed: usize,
    touch_inits: usize,
    touch_polls: usize,
    prepared: bool,
    released: bool,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self {
            input: ScriptedInput::new(),
            fatal_messages: Vec::new(),
            ticks: MockTickSource::new(),
            tick_step: 0,
            frames_allowed: 0,
            touch_inits: 0,
            touch_polls: 0,
            prepared: false,
            released: false,
        }
    }

    /// Let the lifecycle probe answer yes `frames` times before stopping.
    pub fn allow_frames(&mut self, frames: usize) {
        self.frames_allowed = frames;
    }

    /// Advance the tick counter by `step` on every read.
    pub fn set_tick_step(&mut self, step: u64) {
        self.tick_step = step;
    }

    pub fn scans(&self) -> usize {
        self.input.scan_count()
    }

    pub fn touch_inits(&self) -> usize {
        self.touch_inits
    }

    pub fn touch_polls(&self) -> usize {
        self.touch_polls
    }

    pub fn prepared(&self) -> bool {
        self.prepared
    }

    pub fn released(&self) -> bool {
        self.released
    }
}

impl Default for ScriptedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for ScriptedHost {
    fn raw_ticks(&self) -> u64 {
        let ticks = self.ticks.raw_ticks();
        self.ticks.advance(self.tick_step);
        ticks
    }

    fn ticks_per_second(&self) -> f64 {
        self.ticks.ticks_per_second()
    }
}

impl RawInputSource for ScriptedHost {
    fn scan(&mut self) -> RawInputState {
        self.input.scan()
    }
}

impl TouchChannel for ScriptedHost {
    fn init(&mut self) {
        self.touch_inits += 1;
    }

    fn poll(&mut self) {
        self.touch_polls += 1;
    }
}

impl HostLifecycle for ScriptedHost {
    fn prepare(&mut self) {
        self.prepared = true;
    }

    fn keep_running(&mut self) -> bool {
        if self.frames_allowed == 0 {
            return false;
        }
        self.frames_allowed -= 1;
        true
    }

    fn release(&mut self) {
        self.released = true;
    }
}

impl FatalDisplay for ScriptedHost {
    fn show_fatal(&mut self, message: &str) {
        self.fatal_messages.push(message.to_string());
    }
}
