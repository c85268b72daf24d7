//! The terminal failure path: a typed fatal error plus the blocking reporter.
//!
//! Fatal conditions are the unrecoverable tier of this layer's two-tier
//! error model. They propagate as [`FatalError`] up to the frame driver,
//! which calls [`report`] exactly once: show the message, block until the
//! user acknowledges it, and only then let shutdown proceed. Recoverable
//! conditions never come through here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

use crate::traits::{FatalDisplay, RawButtons, RawInputSource};

/// An unrecoverable condition. Reaching the frame driver with one of these
/// ends the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("out of file handles")]
    HandlePoolExhausted,

    #[error("error opening {path} for write: {source}")]
    WriteOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error sizing {path}: {source}")]
    LengthProbe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fatal raised by the application itself.
    #[error("{0}")]
    Message(String),
}

impl FatalError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// Report a fatal error and block until the user acknowledges it.
///
/// Shows the message through the host's fatal display, then spins on raw
/// input scans until a Confirm (Start) press edge arrives. The process is
/// about to terminate regardless, so the wait is deliberately synchronous:
/// the user must see the failure before losing context.
pub fn report<H>(err: &FatalError, host: &mut H)
where
    H: FatalDisplay + RawInputSource + ?Sized,
{
    error!("fatal: {err}");
    host.show_fatal(&format!("{err}\npress START to exit"));

    loop {
        let state = host.scan();
        if state.pressed.contains(RawButtons::START) {
            break;
        }
    }
}
