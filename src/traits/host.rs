use crate::traits::{RawInputSource, TickSource, TouchChannel};

/// Host-owned control over the outer frame loop.
///
/// The host substrate decides whether the next iteration may run. The probe
/// may suspend the whole process for an unbounded, externally-triggered
/// duration before returning; callers must never assume it returns promptly.
pub trait HostLifecycle {
    /// One-time platform setup before application init (e.g. enabling a
    /// faster CPU clock where the hardware supports it).
    fn prepare(&mut self) {}

    /// Whether the loop is allowed to run another iteration.
    fn keep_running(&mut self) -> bool;

    /// Release graphics/input resources. Invoked once on termination, after
    /// application shutdown, on both the clean and the fatal path.
    fn release(&mut self) {}
}

/// Output surface for the fatal error reporter.
pub trait FatalDisplay {
    /// Present the message to the user. Must not block.
    fn show_fatal(&mut self, message: &str);
}

/// The full host substrate surface required by the frame driver.
///
/// Blanket-implemented for any type providing all five seams.
pub trait HostSubstrate:
    TickSource + RawInputSource + TouchChannel + HostLifecycle + FatalDisplay
{
}

impl<T> HostSubstrate for T where
    T: TickSource + RawInputSource + TouchChannel + HostLifecycle + FatalDisplay
{
}
