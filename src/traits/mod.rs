//! Seam traits between the adaptation layer and the host substrate.
//!
//! This module provides:
//! - [`TickSource`]: Free-running hardware tick counter access
//! - [`RawInputSource`]: Raw device state polling with edge masks
//! - [`TouchChannel`]: Pointer/touch collaborator polled once per input cycle
//! - [`HostLifecycle`] / [`FatalDisplay`]: Host-owned loop control and fatal output
//! - [`Application`]: The portable application driven by the frame loop

mod app;
mod host;
mod input;
mod time;

pub use app::Application;
pub use host::{FatalDisplay, HostLifecycle, HostSubstrate};
pub use input::{RawButtons, RawInputSource, RawInputState, ScriptedInput, TouchChannel};
pub use time::{MockTickSource, StdTickSource, TickSource};
