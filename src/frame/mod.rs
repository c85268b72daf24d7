//! The outer frame loop: lifecycle state machine, delta timing, and the
//! service surface lent to the application each iteration.

mod driver;
mod services;

pub use driver::{FrameDriver, LifecycleState, NOMINAL_FIRST_DELTA, RunOutcome};
pub use services::PalServices;
