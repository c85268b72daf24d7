/// Engine-neutral logical key code.
///
/// Navigation, confirm/cancel, the four face actions, the shoulder pair, and
/// synthetic codes for the auxiliary triggers. Deliberately decoupled from
/// the physical control layout of any one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    ActionA,
    ActionB,
    ActionX,
    ActionY,
    ShoulderL,
    ShoulderR,
    /// Synthetic code for the left auxiliary trigger.
    AuxL,
    /// Synthetic code for the right auxiliary trigger.
    AuxR,
}

/// A single logical key transition.
///
/// Stateless value pushed into the application's event queue; the adaptation
/// layer retains nothing after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// true = pressed, false = released.
    pub pressed: bool,
}
