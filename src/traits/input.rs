use std::collections::VecDeque;
use std::ops::{BitOr, BitOrAssign};

/// Bitmask of physical controls as reported by the host input hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawButtons(pub u32);

impl RawButtons {
    pub const SELECT: RawButtons = RawButtons(1 << 0);
    pub const START: RawButtons = RawButtons(1 << 1);
    pub const DPAD_UP: RawButtons = RawButtons(1 << 2);
    pub const DPAD_DOWN: RawButtons = RawButtons(1 << 3);
    pub const DPAD_LEFT: RawButtons = RawButtons(1 << 4);
    pub const DPAD_RIGHT: RawButtons = RawButtons(1 << 5);
    pub const Y: RawButtons = RawButtons(1 << 6);
    pub const X: RawButtons = RawButtons(1 << 7);
    pub const B: RawButtons = RawButtons(1 << 8);
    pub const A: RawButtons = RawButtons(1 << 9);
    pub const L: RawButtons = RawButtons(1 << 10);
    pub const R: RawButtons = RawButtons(1 << 11);
    pub const ZL: RawButtons = RawButtons(1 << 12);
    pub const ZR: RawButtons = RawButtons(1 << 13);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: RawButtons) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RawButtons {
    type Output = RawButtons;

    fn bitor(self, rhs: RawButtons) -> RawButtons {
        RawButtons(self.0 | rhs.0)
    }
}

impl BitOrAssign for RawButtons {
    fn bitor_assign(&mut self, rhs: RawButtons) {
        self.0 |= rhs.0;
    }
}

/// One fresh read of the device state: which controls changed since the
/// previous read. The hardware reports edges, not levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawInputState {
    /// Controls newly pressed since the last scan.
    pub pressed: RawButtons,
    /// Controls newly released since the last scan.
    pub released: RawButtons,
}

/// Abstraction over the host input hardware.
/// Implementations: host substrates (production), ScriptedInput (testing).
pub trait RawInputSource {
    /// Perform one fresh read of the device state.
    fn scan(&mut self) -> RawInputState;
}

/// Pointer/touch subsystem, an external collaborator.
///
/// The adaptation layer only guarantees that `poll` is invoked exactly once
/// per input cycle, with no ordering guarantee relative to key events.
/// Implementations deliver their positional/contact events through their own
/// channel to the application.
pub trait TouchChannel {
    /// One-time setup, invoked once during boot after application init.
    fn init(&mut self) {}

    /// Poll for touch state, invoked once per input cycle.
    fn poll(&mut self);
}

/// Scripted input source for deterministic testing.
///
/// Returns queued states in order; once the script is exhausted every scan
/// reports no transitions.
#[derive(Default)]
pub struct ScriptedInput {
    script: VecDeque<RawInputState>,
    scans: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw state to be returned by a future scan.
    pub fn queue(&mut self, state: RawInputState) {
        self.script.push_back(state);
    }

    /// Queue a press edge for the given controls.
    pub fn press(&mut self, buttons: RawButtons) {
        self.queue(RawInputState {
            pressed: buttons,
            released: RawButtons::default(),
        });
    }

    /// Queue a release edge for the given controls.
    pub fn release(&mut self, buttons: RawButtons) {
        self.queue(RawInputState {
            pressed: RawButtons::default(),
            released: buttons,
        });
    }

    /// Number of scans performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans
    }
}

impl RawInputSource for ScriptedInput {
    fn scan(&mut self) -> RawInputState {
        self.scans += 1;
        self.script.pop_front().unwrap_or_default()
    }
}
