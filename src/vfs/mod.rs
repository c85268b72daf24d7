//! Virtual file table mapping small integer handles to open host files.
//!
//! This module provides:
//! - [`FileTable`]: Fixed-capacity pool of open files with first-fit allocation
//! - [`FileHandle`]: Opaque index into the table
//!
//! The pool size is a deliberate resource ceiling for constrained targets;
//! exhausting it is a fatal condition, not a growth trigger.

mod handle_table;

pub use handle_table::{FileHandle, FileTable, MAX_HANDLES};
