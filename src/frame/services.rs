use crate::input::EventQueue;
use crate::vfs::FileTable;

/// The adaptation-layer surface lent to the application during `init` and
/// `update`: file access, the pending key events, and a way to ask the loop
/// to stop.
pub struct PalServices<'a> {
    /// The virtual file table.
    pub files: &'a mut FileTable,
    /// Key events dispatched since the last update, oldest first.
    pub events: &'a mut EventQueue,
    quit_requested: &'a mut bool,
}

impl<'a> PalServices<'a> {
    pub(crate) fn new(
        files: &'a mut FileTable,
        events: &'a mut EventQueue,
        quit_requested: &'a mut bool,
    ) -> Self {
        Self {
            files,
            events,
            quit_requested,
        }
    }

    /// Ask the frame driver to stop after the current iteration. This is the
    /// clean exit path; the exit code stays zero.
    pub fn request_quit(&mut self) {
        *self.quit_requested = true;
    }
}
