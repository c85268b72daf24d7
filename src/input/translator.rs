use tracing::trace;

use crate::input::{EventQueue, KeyCode, KeyEvent};
use crate::traits::{RawButtons, RawInputSource, TouchChannel};

/// Fixed physical-to-logical translation table. Events within one poll are
/// emitted in this order; bits outside the table are silently ignored.
const KEY_TABLE: &[(RawButtons, KeyCode)] = &[
    (RawButtons::SELECT, KeyCode::Cancel),
    (RawButtons::START, KeyCode::Confirm),
    (RawButtons::DPAD_UP, KeyCode::Up),
    (RawButtons::DPAD_DOWN, KeyCode::Down),
    (RawButtons::DPAD_LEFT, KeyCode::Left),
    (RawButtons::DPAD_RIGHT, KeyCode::Right),
    (RawButtons::Y, KeyCode::ActionY),
    (RawButtons::X, KeyCode::ActionX),
    (RawButtons::B, KeyCode::ActionB),
    (RawButtons::A, KeyCode::ActionA),
    (RawButtons::L, KeyCode::ShoulderL),
    (RawButtons::R, KeyCode::ShoulderR),
    (RawButtons::ZL, KeyCode::AuxL),
    (RawButtons::ZR, KeyCode::AuxR),
];

/// Polls raw device state once per loop iteration and dispatches abstract
/// key events into the application's queue.
#[derive(Default)]
pub struct InputTranslator;

impl InputTranslator {
    pub fn new() -> Self {
        Self
    }

    /// One input cycle: a single fresh scan of the device state, one event
    /// per recognized transition (downs first, then ups), then exactly one
    /// poll of the touch channel. No transitions means no events.
    pub fn poll_and_dispatch<H>(&mut self, host: &mut H, queue: &mut EventQueue)
    where
        H: RawInputSource + TouchChannel + ?Sized,
    {
        let state = host.scan();

        if !state.pressed.is_empty() {
            Self::emit(state.pressed, true, queue);
        }
        if !state.released.is_empty() {
            Self::emit(state.released, false, queue);
        }

        host.poll();
    }

    fn emit(mask: RawButtons, pressed: bool, queue: &mut EventQueue) {
        for &(button, code) in KEY_TABLE {
            if mask.contains(button) {
                trace!(?code, pressed, "key event");
                queue.push(KeyEvent { code, pressed });
            }
        }
    }
}
