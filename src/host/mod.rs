//! Reference host substrate implementations.
//!
//! The real substrate is whatever vendor runtime the process ships on; these
//! two exist so the layer can be exercised without it:
//! - [`ScriptedHost`]: Fully deterministic, used by tests
//! - [`DesktopHost`]: std-clock host for running the demo binary

mod desktop;
mod scripted;

pub use desktop::DesktopHost;
pub use scripted::ScriptedHost;
