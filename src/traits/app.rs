use crate::config::PalConfig;
use crate::fatal::FatalError;
use crate::frame::PalServices;

/// The portable application driven by the frame loop.
///
/// The adaptation layer calls `init` exactly once, then `update` once per
/// loop iteration, then `shutdown` exactly once on termination (clean or
/// fatal). Fatal-capable operations on [`PalServices`] return
/// `Result<_, FatalError>`; the application propagates them with `?` and the
/// frame driver routes them through the blocking reporter.
pub trait Application {
    /// One-time initialization. An `Err` is a fatal condition.
    fn init(&mut self, config: &PalConfig, pal: &mut PalServices<'_>) -> Result<(), FatalError>;

    /// One simulation/render step. `delta_seconds` is the elapsed time since
    /// the previous update as measured by the monotonic clock.
    fn update(&mut self, delta_seconds: f64, pal: &mut PalServices<'_>) -> Result<(), FatalError>;

    /// Orderly teardown. Runs on clean exit and after an acknowledged fatal.
    fn shutdown(&mut self);
}
