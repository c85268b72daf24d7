//! Translation of raw device state into engine-neutral key events.
//!
//! This module provides:
//! - [`KeyCode`] / [`KeyEvent`]: Logical key codes decoupled from the physical layout
//! - [`EventQueue`]: FIFO sink the application drains between frames
//! - [`InputTranslator`]: Per-iteration poll that maps raw transitions to events

mod key_event;
mod queue;
mod translator;

pub use key_event::{KeyCode, KeyEvent};
pub use queue::EventQueue;
pub use translator::InputTranslator;
